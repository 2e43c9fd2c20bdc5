//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Configuración global de la aplicación (extensible para más secciones).
pub struct AppConfig {
    /// Imprimir el trace de eventos del run en stdout.
    pub trace: bool,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    Lazy::force(&DOTENV_LOADED);
    let trace = env::var("LAUNCHFLOW_TRACE").map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                                            .unwrap_or(false);
    AppConfig { trace }
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
