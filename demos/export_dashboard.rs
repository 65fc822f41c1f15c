//! Export a sample two-tab dashboard, one PDF per tab and page setup

use dashboard_pdf_paging::{
    DashCard, ExportPlan, ExportSettings, Orientation, PageFormat, TabId, export_document,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with debug level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let cards = vec![
        DashCard::new(1, 0, 4).with_width(8).with_title("Orders today").on_tab(1),
        DashCard::new(2, 0, 4).at_col(8).with_width(8).with_title("Revenue today").on_tab(1),
        DashCard::new(3, 0, 4).at_col(16).with_width(8).with_title("New users").on_tab(1),
        DashCard::new(4, 4, 8).with_width(16).with_title("Revenue by week").on_tab(1),
        DashCard::new(5, 4, 12).at_col(16).with_width(8).with_title("Top products").on_tab(1),
        DashCard::new(6, 16, 9).with_width(24).with_title("Orders by region").on_tab(1),
        DashCard::new(7, 25, 6).with_width(12).with_title("Refunds").on_tab(1),
        DashCard::new(8, 25, 10).at_col(12).with_width(12).with_title("Support tickets").on_tab(1),
        DashCard::new(9, 0, 10).with_width(24).with_title("Funnel").on_tab(2),
    ];

    let out_dir = std::env::temp_dir();
    for (format, orientation) in [
        (PageFormat::A4, Orientation::Portrait),
        (PageFormat::A3, Orientation::Landscape),
    ] {
        for tab in [TabId(1), TabId(2)] {
            let settings = ExportSettings::new(format!("Shop overview tab {}", tab.0))
                .with_format(format)
                .with_orientation(orientation)
                .with_tab(tab);
            let plan = ExportPlan::build(&cards, settings)?;

            let mut doc = export_document(&plan)?;
            let path = out_dir.join(format!("{format}-{orientation}-{}", plan.file_name()));
            doc.save(&path)?;

            info!(
                "Wrote {} pages ({} rows each) to {}",
                plan.page_count(),
                plan.page_max_rows(),
                path.display()
            );
        }
    }

    Ok(())
}
