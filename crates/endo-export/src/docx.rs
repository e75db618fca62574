use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Footer, Header, PageMargin, Paragraph, Pic, Run, RunFonts,
    Table, TableCell, TableRow, WidthType,
};
use tracing::debug;

use crate::error::ExportError;
use crate::images::{decode_data_url, image_dimensions};
use crate::layout::{Alignment, Block, DocumentModel, TableGrid, TextRun, line_height_in};

const TWIPS_PER_INCH: f64 = 1440.0;
const EMU_PER_INCH: f64 = 914_400.0;

fn twips(inches: f64) -> i32 {
    (inches * TWIPS_PER_INCH).round() as i32
}

fn emu(inches: f64) -> u32 {
    (inches.max(0.0) * EMU_PER_INCH).round() as u32
}

// OOXML uses half-points
fn half_points(size_pt: f64) -> usize {
    (size_pt * 2.0).round().max(1.0) as usize
}

enum Content {
    Paragraph(Paragraph),
    Table(Table),
}

struct Writer<'a> {
    font: &'a str,
    body_size_pt: f64,
}

/// Serialize a laid-out referral document to DOCX bytes.
pub fn write_docx(model: &DocumentModel) -> Result<Vec<u8>, ExportError> {
    let writer = Writer {
        font: &model.font_family,
        body_size_pt: model.body_font_size_pt,
    };
    let margins = &model.page.margins;

    let mut header = Header::new();
    for block in &model.header.blocks {
        header = match writer.content(block)? {
            Content::Paragraph(p) => header.add_paragraph(p),
            Content::Table(t) => header.add_table(t),
        };
    }

    let mut footer = Footer::new();
    for block in &model.footer.blocks {
        footer = match writer.content(block)? {
            Content::Paragraph(p) => footer.add_paragraph(p),
            Content::Table(t) => footer.add_table(t),
        };
    }

    let mut docx = Docx::new()
        .page_size(
            twips(model.page.page.width_in) as u32,
            twips(model.page.page.height_in) as u32,
        )
        .page_margin(
            PageMargin::new()
                .top(twips(margins.top))
                .right(twips(margins.right))
                .bottom(twips(margins.bottom))
                .left(twips(margins.left))
                .header(twips(model.header.distance_from_top_in))
                .footer(twips(model.footer.distance_from_bottom_in)),
        )
        .default_fonts(RunFonts::new().ascii(&model.font_family))
        .default_size(half_points(model.body_font_size_pt))
        .header(header)
        .footer(footer);

    for block in &model.body {
        docx = match writer.content(block)? {
            Content::Paragraph(p) => docx.add_paragraph(p),
            Content::Table(t) => docx.add_table(t),
        };
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn align(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
    }
}

impl Writer<'_> {
    fn content(&self, block: &Block) -> Result<Content, ExportError> {
        let paragraph = match block {
            Block::Paragraph { runs, alignment } => runs
                .iter()
                .fold(Paragraph::new().align(align(*alignment)), |p, run| {
                    p.add_run(self.run(run))
                }),
            Block::Image { image, alignment } => {
                let bytes = decode_data_url(&image.data_url)?;
                // docx-rs panics on bytes it cannot decode.
                image_dimensions(&bytes)?;
                let pic = Pic::new(&bytes).size(emu(image.size.width_in), emu(image.size.height_in));
                Paragraph::new()
                    .align(align(*alignment))
                    .add_run(Run::new().add_image(pic))
            }
            Block::Placeholder { size } => {
                // Approximate the reserved height with empty lines.
                let lines = (size.height_in / line_height_in(self.body_size_pt)).round() as usize;
                let run = (1..lines.max(1)).fold(Run::new(), |run, _| {
                    run.add_break(BreakType::TextWrapping)
                });
                Paragraph::new().add_run(run)
            }
            Block::Table(grid) => return Ok(Content::Table(self.table(grid)?)),
        };
        Ok(Content::Paragraph(paragraph))
    }

    fn run(&self, run: &TextRun) -> Run {
        let mut r = Run::new()
            .add_text(&run.text)
            .size(half_points(run.size_pt))
            .fonts(RunFonts::new().ascii(self.font));
        if run.bold {
            r = r.bold();
        }
        r
    }

    fn table(&self, grid: &TableGrid) -> Result<Table, ExportError> {
        let widths: Vec<usize> = grid
            .column_widths_in
            .iter()
            .map(|w| twips(*w).max(0) as usize)
            .collect();

        let mut rows = Vec::with_capacity(grid.rows.len());
        for row in &grid.rows {
            let mut cells = Vec::with_capacity(row.len());
            for (index, cell) in row.iter().enumerate() {
                let width = widths.get(index).copied().unwrap_or_default();
                let mut table_cell = TableCell::new().width(width, WidthType::Dxa);
                if cell.blocks.is_empty() {
                    table_cell = table_cell.add_paragraph(Paragraph::new());
                }
                for block in &cell.blocks {
                    match self.content(block)? {
                        Content::Paragraph(p) => table_cell = table_cell.add_paragraph(p),
                        Content::Table(_) => debug!("nested table skipped"),
                    }
                }
                cells.push(table_cell);
            }
            rows.push(TableRow::new(cells));
        }

        Ok(Table::new(rows).set_grid(widths))
    }
}
