use super::ui;
use crate::core::catalog::Catalog;

pub fn render(catalog: &Catalog) -> String {
    let mut output = format!(
        "Catalog: {} ({} funds)\n\n",
        ui::style_text(&catalog.source().display().to_string(), ui::StyleType::Title),
        catalog.len()
    );
    output.push_str(&ui::fund_table(catalog.funds()).to_string());

    if catalog.unrated_count() > 0 {
        output.push_str(&format!(
            "\n\n{}",
            ui::style_text(
                &format!(
                    "{} fund(s) have an unrecognized risk label and are never recommended",
                    catalog.unrated_count()
                ),
                ui::StyleType::Subtle,
            )
        ));
    }
    output
}

pub fn run(catalog: &Catalog) {
    println!("{}", render(catalog));
}
