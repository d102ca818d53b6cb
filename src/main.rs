use anyhow::Result;
use std::env;
use std::fs;
use std::path::Path;

use portfolio::{render_page, PortfolioData, Tab};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "export" {
        // Export mode: write the rendered page to disk
        let out_path = args.get(2).map(String::as_str).unwrap_or("index.html");
        run_export(out_path)?;
    } else {
        // UI mode (default)
        run_ui_mode()?;
    }

    Ok(())
}

fn run_export(out_path: &str) -> Result<()> {
    println!("📄 Exporting portfolio page...");

    let data = PortfolioData::new();
    let html = render_page(&data, Tab::default());

    fs::write(Path::new(out_path), &html)?;

    println!("✓ Wrote {} bytes to {}", html.len(), out_path);
    println!("  Tabs: built (default), learnt, taught");
    println!("  Recommendation letters are served from /recommendations/");

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    println!("🖥️  Loading portfolio UI...\n");

    let data = PortfolioData::new();
    println!(
        "✓ Loaded {} projects, {} learnings, {} teachings, {} recommendations\n",
        data.projects.len(),
        data.learnings.len(),
        data.teachings.len(),
        data.recommendations.len()
    );
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = portfolio::ui::App::new(data);
    portfolio::ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use web UI: cargo run --bin portfolio-server --features server");
    std::process::exit(1);
}
