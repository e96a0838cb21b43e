//! Knapsack benchmark chart generator
//!
//! Reads `knapsack_results.csv` (GBK-encoded) from the working directory,
//! prints a per-group timing summary, and writes one two-panel comparison
//! chart per capacity value. No flags; `RUST_LOG` controls diagnostic
//! verbosity.

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

use knapchart::chart::{render_capacity_chart, ChartConfig};
use knapchart::dataset::Dataset;
use knapchart::stats;

/// Fixed input table, written by the solver harness.
const INPUT_FILE: &str = "knapsack_results.csv";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("错误: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = ChartConfig::default();

    println!("正在加载数据（GBK编码）...");
    let dataset = match Dataset::load(INPUT_FILE) {
        Ok(dataset) => dataset,
        Err(err) => {
            println!("数据加载失败: {err}");
            println!("请检查：");
            println!("1. 文件是否存在 2. 编码是否为GBK 3. 列名是否匹配");
            std::process::exit(1);
        }
    };

    println!("\n数据摘要:");
    print!("{}", stats::summary_table(&dataset));

    for capacity in dataset.capacities() {
        println!("\n正在分析容量 {capacity}...");
        render_capacity_chart(&dataset, capacity, &config)
            .with_context(|| format!("failed to render chart for capacity {capacity}"))?;
    }

    println!("\n分析完成！图表已保存为 knapsack_capacity_*.png");
    Ok(())
}
