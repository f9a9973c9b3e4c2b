//! Paginated PDF rendering of a profile's current training plan: a header
//! block, then the prescriptions grouped by day, with a day heading printed
//! each time the day changes in sort order.

use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::export::error::ExportError;
use crate::models::plan::Prescription;
use crate::models::profile::Profile;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 15.0;
const BOTTOM_LIMIT: f32 = 25.0;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

/// Render the plan as PDF bytes. `items` must already be sorted by day then
/// position, the order the day grouping follows.
pub fn render_plan_pdf(
    email: &str,
    profile: &Profile,
    items: &[Prescription],
) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        "Training plan",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "content",
    );
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
        oblique: doc.add_builtin_font(BuiltinFont::HelveticaOblique)?,
    };

    let mut layer = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - 18.0;

    layer.use_text(
        format!("Training plan for: {}", email),
        16.0,
        Mm(MARGIN_LEFT),
        Mm(y),
        &fonts.bold,
    );
    y -= 8.0;
    layer.use_text(
        format!(
            "Age: {}  Height: {} cm  Weight: {} kg",
            profile.age, profile.height, profile.weight
        ),
        12.0,
        Mm(MARGIN_LEFT),
        Mm(y),
        &fonts.regular,
    );
    y -= 7.0;
    layer.use_text(
        format!(
            "Goal: {}  Level: {}",
            profile.goal.label(),
            profile.fitness_level.label()
        ),
        12.0,
        Mm(MARGIN_LEFT),
        Mm(y),
        &fonts.regular,
    );
    y -= 11.0;

    let mut current_day = None;
    for item in items {
        if y < BOTTOM_LIMIT {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
            layer = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_HEIGHT - 18.0;
        }
        if current_day != Some(item.day) {
            current_day = Some(item.day);
            layer.use_text(item.day.label(), 13.0, Mm(MARGIN_LEFT), Mm(y), &fonts.bold);
            y -= 7.0;
        }
        write_exercise_line(&layer, &fonts, item, &mut y);
    }

    let mut bytes = Vec::new();
    doc.save(&mut BufWriter::new(&mut bytes))?;
    Ok(bytes)
}

fn write_exercise_line(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    item: &Prescription,
    y: &mut f32,
) {
    let line = format!(
        "- {} | Sets: {} | Reps: {} | Rest: {}",
        item.exercise_name, item.sets, item.reps, item.rest
    );
    layer.use_text(line, 11.0, Mm(MARGIN_LEFT + 4.0), Mm(*y), &fonts.regular);
    *y -= 6.0;
    if !item.notes.is_empty() {
        layer.use_text(
            format!("Note: {}", item.notes),
            10.0,
            Mm(MARGIN_LEFT + 8.0),
            Mm(*y),
            &fonts.oblique,
        );
        *y -= 5.0;
    }
}
