use stress_test::{stress_test_index, stress_test_map, stress_test_scaling};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("failed to start runtime: {err}");
            std::process::exit(1);
        }
    };
    rt.block_on(async_main());
}

async fn async_main() {
    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║            CONCURRENT LOOKUP STRESS TESTS                  ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    // Test 1: map table with small scale
    let stats = stress_test_map(4, 64, 10_000).await;
    stats.print();

    // Test 2: index table with small scale
    let stats = stress_test_index(4, 64, 10_000).await;
    stats.print();

    // Test 3: map table with medium scale
    let stats = stress_test_map(16, 1024, 50_000).await;
    stats.print();

    // Test 4: index table with medium scale
    let stats = stress_test_index(16, 256, 50_000).await;
    stats.print();

    // Test 5: Scaling analysis
    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║          SCALING ANALYSIS (index parse is linear)          ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    stress_test_scaling(8, 2).await;

    println!("\n✓ All stress tests completed successfully!");
}
