use super::ui;
use crate::core::rates::{Conversion, ResolutionMethod};

/// Converter panel: the converted amount, the unit rate and the codes the
/// quote set knows about.
pub fn render_conversion(conversion: &Conversion, currencies: &[String]) -> String {
    let mut output = format!(
        "{}\n\n",
        ui::style_text("Currency Converter", ui::StyleType::Title)
    );

    let amount = format!("{:.2}", conversion.amount);
    let converted = format!("{:.2}", conversion.converted);
    output.push_str(&format!(
        "{} {}  ⇄  {} {}\n",
        ui::style_text(&amount, ui::StyleType::Label),
        conversion.from,
        ui::style_text(&converted, ui::StyleType::Value),
        conversion.to,
    ));
    let unit_rate = format!(
        "1 {} = {:.4} {}",
        conversion.from, conversion.rate, conversion.to
    );
    output.push_str(&ui::style_text(&unit_rate, ui::StyleType::Subtle));

    if conversion.method == ResolutionMethod::Defaulted {
        output.push_str(&format!(
            "\n{}",
            ui::style_text(
                &format!(
                    "No quote path from {} to {}; showing an approximate rate",
                    conversion.from, conversion.to
                ),
                ui::StyleType::Error
            )
        ));
    } else {
        output.push_str(&ui::style_text(
            &format!(" ({})", conversion.method),
            ui::StyleType::Subtle,
        ));
    }

    output.push_str(&format!(
        "\n\nAvailable: {}",
        ui::style_text(&currencies.join(" "), ui::StyleType::Subtle)
    ));
    output
}
