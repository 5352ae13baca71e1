use async_trait::async_trait;
use std::io::{self, Write};
use std::sync::Arc;
use yuliq_api::Catalogo;
use yuliq_domain::{Factura, FacturaFilter, Filtro, Producto, ProductoFilter, TipoProducto};
use yuliq_views::{Alertas, DialogoHost, Documento, EventoAlerta, Exportador, ListView, Navegador, ProductoForm, QueryParams,
                  UpdateView};

/// Pequeño menú interactivo para administrar la tienda usando las vistas de
/// `yuliq-views` sobre el catálogo REST (o en memoria sin la feature `rest`).
///
/// Opciones soportadas:
/// 1) Ver productos (página y orden)
/// 2) Filtrar productos
/// 3) Ordenar productos por columna
/// 4) Crear producto
/// 5) Editar producto
/// 6) Eliminar producto
/// 7) Exportar la página de productos
/// 8) Ver facturas
/// 9) Salir
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let catalogo = catalogo()?;
    let navegador: Arc<dyn Navegador> = Arc::new(NavegadorConsola);
    let alertas: Arc<dyn Alertas> = Arc::new(AlertasConsola);

    let mut productos: ListView<Producto, ProductoFilter> =
        ListView::por_defecto(catalogo.productos.clone(), navegador.clone(), alertas.clone(), catalogo.items_per_page);
    let mut facturas: ListView<Factura, FacturaFilter> =
        ListView::por_defecto(catalogo.facturas.clone(), navegador.clone(), alertas.clone(), catalogo.items_per_page);
    productos.handle_navigation(&QueryParams::new()).await;

    loop {
        println!("\n== Yuliq back office ==");
        println!("1) Ver productos (página y orden)");
        println!("2) Filtrar productos");
        println!("3) Ordenar productos por columna");
        println!("4) Crear producto");
        println!("5) Editar producto");
        println!("6) Eliminar producto");
        println!("7) Exportar la página de productos");
        println!("8) Ver facturas");
        println!("9) Salir");
        print!("Elige una opción: ");
        io::stdout().flush().ok();

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;
        match choice.trim() {
            "1" => {
                let mut params = QueryParams::new();
                let page = prompt("Página (enter para la 1): ")?;
                let sort = prompt("Orden campo,asc|desc (enter para id,asc): ")?;
                if !page.trim().is_empty() {
                    params.insert("page".into(), page.trim().to_string());
                }
                if !sort.trim().is_empty() {
                    params.insert("sort".into(), sort.trim().to_string());
                }
                productos.handle_navigation(&params).await;
                imprimir_productos(&productos);
            }
            "2" => {
                let filtro = ProductoFilter { nombre: opcional(prompt("Nombre contiene: ")?),
                                              calorias: opcional(prompt("Calorías menor que: ")?),
                                              precio: opcional(prompt("Precio menor que: ")?),
                                              tipo: opcional(prompt("Tipo (ENTRANTE/PRINCIPAL): ")?),
                                              existencias: opcional(prompt("Existencias menor que: ")?) };
                if filtro.is_empty() {
                    productos.reset_filter().await;
                } else {
                    productos.filter(filtro).await;
                }
                imprimir_productos(&productos);
            }
            "3" => {
                let campo = prompt("Columna (id, nombreProducto, precio, existencias, calorias): ")?;
                if campo.trim().is_empty() {
                    eprintln!("Columna vacía");
                    continue;
                }
                productos.sort_by(campo.trim()).await;
                imprimir_productos(&productos);
            }
            "4" | "5" => {
                let registro = if choice.trim() == "4" {
                    Producto::default()
                } else {
                    let id = match prompt("Id del producto: ")?.trim().parse::<i64>() {
                        Ok(n) => n,
                        Err(_) => { eprintln!("Id inválido"); continue; }
                    };
                    match yuliq_views::resolve(catalogo.productos.as_ref(), Some(id), navegador.as_ref()).await {
                        Ok(Some(p)) => p,
                        Ok(None) => continue,
                        Err(e) => { eprintln!("Error cargando producto: {}", e); continue; }
                    }
                };
                let mut vista: UpdateView<ProductoForm> = UpdateView::new(catalogo.clone(), navegador.clone(), alertas.clone());
                vista.init(registro).await;
                editar_producto(vista.form_mut())?;
                match vista.save().await {
                    Ok(p) => {
                        println!("Producto guardado: {}", p);
                        productos.load_page(None, true).await;
                    }
                    Err(e) => eprintln!("Error guardando producto: {}", e),
                }
            }
            "6" => {
                let id = match prompt("Id del producto a eliminar: ")?.trim().parse::<i64>() {
                    Ok(n) => n,
                    Err(_) => { eprintln!("Id inválido"); continue; }
                };
                match productos.delete(&Producto::with_id(id), &DialogoConsola).await {
                    Ok(r) => println!("Diálogo cerrado: {:?}", r),
                    Err(e) => eprintln!("Error eliminando producto: {}", e),
                }
            }
            "7" => {
                if let Err(e) = productos.export(&ExportadorConsola) {
                    eprintln!("Error exportando: {}", e);
                }
            }
            "8" => {
                facturas.handle_navigation(&QueryParams::new()).await;
                println!("\nID    | FECHA                    | CANTIDAD | USUARIO");
                println!("---------------------------------------------------------");
                for f in facturas.registros() {
                    let fecha = f.fecha_factura.as_ref().map(yuliq_domain::fecha::a_iso).unwrap_or_else(|| "-".into());
                    let user = f.assigned_to.as_ref().and_then(|u| u.login.clone()).unwrap_or_else(|| "-".into());
                    println!("{:<5} | {:<24} | {:<8} | {}",
                             f.id.unwrap_or_default(),
                             fecha,
                             f.cantidad_pagada.map(|c| c.to_string()).unwrap_or_default(),
                             user);
                }
            }
            "9" => {
                println!("Saliendo...");
                break;
            }
            other => {
                println!("Opción inválida: {}", other);
            }
        }
    }

    Ok(())
}

#[cfg(feature = "rest")]
fn catalogo() -> anyhow::Result<Catalogo> {
    Ok(yuliq_api::new_from_env()?)
}

#[cfg(not(feature = "rest"))]
fn catalogo() -> anyhow::Result<Catalogo> {
    Ok(Catalogo::en_memoria())
}

fn imprimir_productos(vista: &ListView<Producto, ProductoFilter>) {
    println!("\nPágina {}/{} ({} productos, orden {:?} {})",
             vista.pager_page(),
             vista.total_pages(),
             vista.total_items(),
             vista.predicate().unwrap_or("-"),
             if vista.ascending() { "asc" } else { "desc" });
    println!("ID    | NOMBRE                         | PRECIO  | EXIST. | TIPO");
    println!("----------------------------------------------------------------------");
    for p in vista.registros() {
        println!("{:<5} | {:<30} | {:<7} | {:<6} | {}",
                 p.id.unwrap_or_default(),
                 p.nombre_producto.as_deref().unwrap_or("-"),
                 p.precio.map(|v| format!("{:.2}", v)).unwrap_or_default(),
                 p.existencias.map(|v| v.to_string()).unwrap_or_default(),
                 p.tipoproducto.as_ref().map(|t| t.to_string()).unwrap_or_default());
    }
}

/// Pide cada campo; enter conserva el valor actual.
fn editar_producto(form: &mut ProductoForm) -> io::Result<()> {
    if let Some(v) = opcional(prompt(&format!("Nombre [{}]: ", form.nombre_producto))?) {
        form.nombre_producto = v;
    }
    if let Some(v) = opcional(prompt(&format!("Precio [{:?}]: ", form.precio))?) {
        form.precio = v.parse().ok();
    }
    if let Some(v) = opcional(prompt(&format!("Existencias [{:?}]: ", form.existencias))?) {
        form.existencias = v.parse().ok();
    }
    if let Some(v) = opcional(prompt(&format!("Calorías [{:?}]: ", form.calorias))?) {
        form.calorias = v.parse().ok();
    }
    if let Some(v) = opcional(prompt(&format!("Tipo [{:?}]: ", form.tipoproducto))?) {
        form.tipoproducto = v.parse::<TipoProducto>().ok();
    }
    Ok(())
}

fn opcional(s: String) -> Option<String> {
    let s = s.trim();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

fn prompt(msg: &str) -> io::Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s)
}

struct NavegadorConsola;

impl Navegador for NavegadorConsola {
    fn navigate(&self, ruta: &str, params: &QueryParams) {
        let query: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        log::info!("-> {}?{}", ruta, query.join("&"));
    }

    fn back(&self) {
        log::info!("<- atrás");
    }
}

struct AlertasConsola;

impl Alertas for AlertasConsola {
    fn broadcast(&self, evento: EventoAlerta) {
        eprintln!("[{}] {}: {}", evento.nombre, evento.clave, evento.mensaje);
    }
}

struct DialogoConsola;

#[async_trait]
impl DialogoHost for DialogoConsola {
    async fn confirmar(&self, pregunta: &str) -> bool {
        match prompt(&format!("{} escribir 'yes' para confirmar: ", pregunta)) {
            Ok(r) => r.trim().eq_ignore_ascii_case("yes"),
            Err(_) => false,
        }
    }
}

struct ExportadorConsola;

impl Exportador for ExportadorConsola {
    fn exportar(&self, documento: &Documento) -> yuliq_views::Result<()> {
        println!("\n== {} ==", documento.nombre);
        println!("{}", documento.titulos().join(" | "));
        for fila in &documento.filas {
            println!("{}", fila.join(" | "));
        }
        Ok(())
    }
}
