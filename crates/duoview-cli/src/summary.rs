use std::path::PathBuf;

use console::Style;
use duoview_core::geometry::{ImageSize, Size};
use duoview_core::viewport::Orientation;

pub struct ImageReport {
    pub path: PathBuf,
    pub size: ImageSize,
    pub orientation: Orientation,
    pub fit_scale: f64,
}

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
    ok: Style,
    warn: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            ok: Style::new().green(),
            warn: Style::new().yellow().bold(),
        }
    }
}

pub fn print_check_summary(first: &ImageReport, second: &ImageReport, viewport: Size, matched: bool) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Image Comparison Check"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(22)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(format!("{}x{}", viewport.width, viewport.height))
    );

    for (label, report) in [("Image 1", first), ("Image 2", second)] {
        println!();
        println!("  {:<14}{}", s.label.apply_to(label), s.path.apply_to(report.path.display()));
        println!(
            "  {:<14}{} ({})",
            s.label.apply_to("Size"),
            s.value.apply_to(report.size),
            report.orientation
        );
        println!(
            "  {:<14}{}",
            s.label.apply_to("Fit scale"),
            s.value.apply_to(format!("{:.4}", report.fit_scale))
        );
    }

    println!();
    if matched {
        println!("  {}", s.ok.apply_to("Sizes match"));
    } else {
        println!(
            "  {}",
            s.warn.apply_to("Image size mismatch: navigation may behave oddly")
        );
    }
    println!();
}
