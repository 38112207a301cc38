use antenna_core::emitter::{emit, HistoryScriptBackend, ModelBackend};
use antenna_core::generator::{generate, FractalConfig};
use antenna_core::plan::FractalFamily;
use std::path::Path;

fn main() {
    let config = FractalConfig::new(FractalFamily::Carpet, 9.0, 0.35, 1);
    let plan = generate(&config).expect("valid parameters");

    println!(
        "{:?} plan: base {}, {} holes",
        plan.family,
        plan.base.name,
        plan.subtractions.len()
    );
    for shape in &plan.subtractions {
        println!("  {}", shape.name);
    }

    let mut backend = HistoryScriptBackend::new();
    backend
        .open_or_create_project(Path::new("carpet_demo.mod"))
        .expect("project path");
    let report = emit(&plan, &mut backend).expect("emission");
    for line in &report.logs {
        println!("{}", line);
    }
    println!("--- script ---\n{}", backend.script());
}
