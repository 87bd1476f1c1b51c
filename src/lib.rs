// ============================================================================
// LMS PORTAL - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones que construyen DOM (solo wasm32)
// - ViewModels: estado + lógica de UI, probados en nativo
// - Services: comunicación API detrás de HttpTransport
// - Stores: persistencia de credenciales detrás de KeyValueStorage
// - State: Rc<RefCell> + subscribers
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod views;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::config::CONFIG;

    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let level = if CONFIG.is_logging_enabled() {
            log::Level::Debug
        } else {
            log::Level::Warn
        };
        wasm_logger::init(wasm_logger::Config::new(level));
        log::info!("🚀 LMS Portal ({})", CONFIG.environment);

        let app = App::new()?;
        app.render()?;
        app.start();

        APP.with(|cell| {
            *cell.borrow_mut() = Some(app);
        });
        Ok(())
    }

    /// Re-render completo desde el estado actual
    pub fn rerender_app() {
        APP.with(|cell| match cell.try_borrow() {
            Ok(app) => match app.as_ref() {
                Some(app) => {
                    if let Err(e) = app.render() {
                        log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                    }
                }
                None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
            },
            Err(_) => log::warn!("⚠️ [RERENDER] App ocupada, render omitido"),
        });
    }

    /// Llamable desde JavaScript
    #[wasm_bindgen]
    pub fn rerender_app_wasm() {
        rerender_app();
    }
}
