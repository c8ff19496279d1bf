// Small dev utility: load the three contract tables and run one evaluation pass.
//
// Usage:
//   cargo run --bin run-evaluation -- workbook.xlsx [simulated_hour]
//   cargo run --bin run-evaluation -- orders.csv zones.csv roster.csv [simulated_hour]
//
// This is intentionally lightweight and does not ship any dashboard UI.

use flowforge_engine::engine::{DispatchOrchestrator, EvaluationRequest, FilterCriteria, TimeContext};
use flowforge_engine::importer::DatasetImporter;
use flowforge_engine::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    // 末参数若是整数则作为模拟小时
    let (paths, simulated_hour) = match args.last().and_then(|s| s.parse::<u32>().ok()) {
        Some(hour) => (&args[..args.len() - 1], Some(hour)),
        None => (&args[..], None),
    };

    let importer = DatasetImporter::new();
    let dataset = match paths {
        [workbook] => importer.import_workbook(workbook)?,
        [orders, zones, roster] => importer.import_csv_tables(orders, zones, roster)?,
        _ => {
            eprintln!("usage: run-evaluation <workbook.xlsx> [hour]");
            eprintln!("       run-evaluation <orders.csv> <zones.csv> <roster.csv> [hour]");
            std::process::exit(2);
        }
    };

    let time = match simulated_hour {
        Some(hour) => TimeContext::simulated(hour)?,
        None => TimeContext::real_time(),
    };

    let orchestrator = DispatchOrchestrator::new();
    let result = orchestrator.run(
        &dataset,
        &EvaluationRequest {
            time,
            filter: FilterCriteria::unrestricted(),
        },
    );

    println!("pass_id={}", result.pass_id);
    println!("reference_time={}", result.reference_time);
    println!(
        "orders={} zones={} available_pickers={}",
        result.summary.total_orders, result.summary.zone_count, result.summary.available_pickers
    );

    println!("--- alerts [{}] ---", result.alert_report.status);
    match result.alert_report.all_clear_message.as_deref() {
        Some(message) => println!("{}", message),
        None => {
            for alert in &result.alert_report.alerts {
                println!("[{}] {}", alert.kind, alert.message);
            }
        }
    }

    println!("--- top priority orders ---");
    for scored in result.orders.iter().take(20) {
        println!(
            "{}\t{}\t{}\t{}\t{:.1}h\t{}",
            scored.order.order_id,
            scored.order.zone,
            scored.order.task,
            scored.order.priority,
            scored.hours_until_due,
            scored.priority_score
        );
    }

    println!("--- picker assignments ---");
    for assignment in &result.assignments {
        println!(
            "{}\t{}\t{}",
            assignment.picker_id,
            assignment.primary_task,
            assignment.zone.as_deref().unwrap_or("Unassigned")
        );
    }

    Ok(())
}
