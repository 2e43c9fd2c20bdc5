//! CLI mínima del orquestador de lanzamientos.
//!
//! - `launchflow run --file <descripcion.json> [--set clave=valor]...`
//!   construye la descripción declarativa, la ejecuta y reporta la lista
//!   final de `global_params`.
//! - `launchflow resolve --expr <texto>` resuelve una expresión sustituible
//!   contra un contexto nuevo (útil para inspeccionar la gramática).

mod config;

use launch_actions::registry::description_from_entity;
use launch_core::frontend::SubstitutionParser;
use launch_core::{Entity, InMemoryEventStore, InMemoryRunRepository, LaunchContext, LaunchEngine};
use launch_subst::ExpressionParser;

fn usage() -> ! {
    eprintln!("usage: launchflow run --file <description.json> [--set key=value]...");
    eprintln!("       launchflow resolve --expr <expression>");
    std::process::exit(2);
}

fn main() {
    // Cargar .env si existe antes de leer cualquier variable.
    config::init_dotenv();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
    }
    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "resolve" => cmd_resolve(&args[2..]),
        _ => usage(),
    }
}

fn cmd_run(args: &[String]) {
    let mut file: Option<String> = None;
    let mut overrides: Vec<(String, String)> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" => {
                i += 1;
                if i < args.len() {
                    file = Some(args[i].clone());
                }
            }
            "--set" => {
                i += 1;
                if i < args.len() {
                    match args[i].split_once('=') {
                        Some((k, v)) => overrides.push((k.to_string(), v.to_string())),
                        None => {
                            eprintln!("[launchflow run] --set espera clave=valor, recibido: {}", args[i]);
                            std::process::exit(2);
                        }
                    }
                }
            }
            _ => {}
        }
        i += 1;
    }

    let Some(file) = file else { usage() };

    let raw = match std::fs::read_to_string(&file) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("[launchflow run] no se pudo leer {file}: {e}");
            std::process::exit(3);
        }
    };
    let root: Entity = match serde_json::from_str(&raw) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("[launchflow run] JSON inválido en {file}: {e}");
            std::process::exit(3);
        }
    };

    let parser = ExpressionParser::new();
    let description = match description_from_entity(&root, &parser) {
        Ok(description) => description,
        Err(e) => {
            eprintln!("[launchflow run] descripción inválida: {e}");
            std::process::exit(3);
        }
    };

    let mut context = LaunchContext::new();
    for (k, v) in overrides {
        context.set_configuration(k, v);
    }

    let mut engine = LaunchEngine::new_with_stores(InMemoryEventStore::default(), InMemoryRunRepository::new());
    match engine.run(&description, &mut context) {
        Ok(run_id) => {
            if config::CONFIG.trace {
                for ev in engine.events_for(run_id) {
                    println!("{:>4} {}", ev.seq, serde_json::to_string(&ev.kind).unwrap_or_default());
                }
            }
            println!("run {run_id} completed");
            for param in context.global_params() {
                println!("  global_param: {param}");
            }
        }
        Err(e) => {
            eprintln!("[launchflow run] ejecución fallida: {e}");
            if config::CONFIG.trace {
                if let Some(events) = engine.events() {
                    for ev in events {
                        println!("{:>4} {}", ev.seq, serde_json::to_string(&ev.kind).unwrap_or_default());
                    }
                }
            }
            std::process::exit(4);
        }
    }
}

fn cmd_resolve(args: &[String]) {
    let mut expr: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        if args[i].as_str() == "--expr" {
            i += 1;
            if i < args.len() {
                expr = Some(args[i].clone());
            }
        }
        i += 1;
    }

    let Some(expr) = expr else { usage() };

    let parser = ExpressionParser::new();
    let sequence = match parser.parse_substitution(&expr) {
        Ok(sequence) => sequence,
        Err(e) => {
            eprintln!("[launchflow resolve] expresión inválida: {e}");
            std::process::exit(3);
        }
    };
    let context = LaunchContext::new();
    match sequence.perform(&context) {
        Ok(resolved) => println!("{resolved}"),
        Err(e) => {
            eprintln!("[launchflow resolve] resolución fallida: {e}");
            std::process::exit(4);
        }
    }
}
