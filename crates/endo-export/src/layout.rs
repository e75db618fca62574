//! Referral document layout.
//!
//! Turns a note and a [`ReferralTemplate`] into a [`DocumentModel`]: page
//! geometry plus ordered header, body and footer blocks with every length
//! resolved to inches and every font size to points. The DOCX writer only
//! serializes what it is given.
//!
//! Layout is pure and total. Images whose aspect ratio has not been probed
//! yet fall back to their bounding box (radiographs) or a fixed 3:1 shape
//! (logo, footer and signature images).

use serde::Serialize;
use tracing::debug;

use endo_core::models::image::ImageDescriptor;
use endo_core::models::note::NoteData;
use endo_core::models::referral_template::{
    FooterConfig, FooterImagePosition, HeaderConfig, HeaderLayout, Margins, RadiographConfig,
    ReferralTemplate, SignatureConfig,
};
use endo_notes::referral::{ReferralBlocks, bold_label_prefix, build_referral_blocks};

use crate::render::{MergeFields, render_or_raw};

/// US Letter.
pub const PAGE_WIDTH_IN: f64 = 8.5;
pub const PAGE_HEIGHT_IN: f64 = 11.0;
pub const POINTS_PER_INCH: f64 = 72.0;
/// Average glyph width as a fraction of the font size.
pub const CHAR_WIDTH_RATIO: f64 = 0.5;
pub const LINE_HEIGHT_RATIO: f64 = 1.2;
/// Largest box a landscape radiograph is fitted into before grid scaling.
pub const LANDSCAPE_CAP: Size = Size::new(3.0, 2.25);
pub const PORTRAIT_CAP: Size = Size::new(1.8, 2.4);
/// Width ÷ height assumed for a letterhead image with no known ratio.
pub const IMAGE_FALLBACK_ASPECT: f64 = 3.0;
/// Gap between the header/footer and the page edge, inside the margin.
pub const FOOTER_INSET_IN: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width_in: f64,
    pub height_in: f64,
}

impl Size {
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.width_in * factor, self.height_in * factor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    pub page: Size,
    pub margins: Margins,
    /// The page minus its margins.
    pub content: Size,
}

impl PageGeometry {
    pub fn letter(margins: Margins) -> Self {
        let content = Size::new(
            (PAGE_WIDTH_IN - margins.left - margins.right).max(0.0),
            (PAGE_HEIGHT_IN - margins.top - margins.bottom).max(0.0),
        );
        Self {
            page: Size::new(PAGE_WIDTH_IN, PAGE_HEIGHT_IN),
            margins,
            content,
        }
    }

    /// Approximate characters per line of body text at `font_size_pt`.
    pub fn chars_per_line(&self, font_size_pt: f64) -> usize {
        let glyph_pt = font_size_pt * CHAR_WIDTH_RATIO;
        if glyph_pt <= 0.0 {
            return 1;
        }
        ((self.content.width_in * POINTS_PER_INCH / glyph_pt).floor() as usize).max(1)
    }
}

pub fn line_height_in(font_size_pt: f64) -> f64 {
    font_size_pt * LINE_HEIGHT_RATIO / POINTS_PER_INCH
}

/// Estimated number of rendered lines: every newline-separated segment wraps
/// at `chars_per_line`, and an empty segment still occupies one line.
pub fn estimate_lines(text: &str, chars_per_line: usize) -> usize {
    let per_line = chars_per_line.max(1);
    text.split('\n')
        .map(|segment| segment.chars().count().div_ceil(per_line).max(1))
        .sum()
}

/// The largest size with `aspect_ratio` (width ÷ height) that fits inside
/// `bounds`. An unknown or unusable ratio returns `bounds` unchanged.
pub fn fit_image(bounds: Size, aspect_ratio: Option<f64>) -> Size {
    let Some(ratio) = aspect_ratio.filter(|r| r.is_finite() && *r > 0.0) else {
        return bounds;
    };
    if bounds.width_in / bounds.height_in > ratio {
        Size::new(bounds.height_in * ratio, bounds.height_in)
    } else {
        Size::new(bounds.width_in, bounds.width_in / ratio)
    }
}

/// A letterhead-style image drawn at a fixed width.
fn image_at_width(image: &ImageDescriptor, width_in: f64) -> Size {
    let ratio = image
        .aspect_ratio
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(IMAGE_FALLBACK_ASPECT);
    Size::new(width_in, width_in / ratio)
}

// Blocks

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub size_pt: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedImage {
    pub file_name: String,
    pub data_url: String,
    pub size: Size,
}

impl PlacedImage {
    fn new(image: &ImageDescriptor, size: Size) -> Self {
        Self {
            file_name: image.file_name.clone(),
            data_url: image.data_url.clone(),
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        runs: Vec<TextRun>,
        alignment: Alignment,
    },
    Image {
        image: PlacedImage,
        alignment: Alignment,
    },
    /// Reserved empty space, e.g. an unfilled radiograph slot.
    Placeholder { size: Size },
    Table(TableGrid),
}

impl Block {
    pub fn text(text: &str, size_pt: f64, alignment: Alignment) -> Self {
        Block::Paragraph {
            runs: vec![TextRun {
                text: text.to_string(),
                bold: false,
                size_pt,
            }],
            alignment,
        }
    }

    pub fn blank(size_pt: f64) -> Self {
        Block::text("", size_pt, Alignment::Left)
    }

    /// A letter line, with its field label (if any) in bold.
    pub fn letter_line(line: &str, size_pt: f64) -> Self {
        let runs = match bold_label_prefix(line) {
            Some(label) => {
                let mut runs = vec![TextRun {
                    text: label.to_string(),
                    bold: true,
                    size_pt,
                }];
                let rest = &line[label.len()..];
                if !rest.is_empty() {
                    runs.push(TextRun {
                        text: rest.to_string(),
                        bold: false,
                        size_pt,
                    });
                }
                runs
            }
            None => vec![TextRun {
                text: line.to_string(),
                bold: false,
                size_pt,
            }],
        };
        Block::Paragraph {
            runs,
            alignment: Alignment::Left,
        }
    }

    /// The concatenated run text of a paragraph.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Block::Paragraph { runs, .. } => Some(runs.iter().map(|r| r.text.as_str()).collect()),
            _ => None,
        }
    }

    /// Estimated vertical space the block consumes on the page.
    pub fn estimated_height_in(&self, page: &PageGeometry, body_size_pt: f64) -> f64 {
        match self {
            Block::Paragraph { runs, .. } => {
                let size = runs.first().map_or(body_size_pt, |r| r.size_pt);
                let text: String = runs.iter().map(|r| r.text.as_str()).collect();
                estimate_lines(&text, page.chars_per_line(size)) as f64 * line_height_in(size)
            }
            Block::Image { image, .. } => image.size.height_in,
            Block::Placeholder { size } => size.height_in,
            Block::Table(grid) => grid
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| {
                            cell.blocks
                                .iter()
                                .map(|b| b.estimated_height_in(page, body_size_pt))
                                .sum::<f64>()
                        })
                        .fold(0.0, f64::max)
                })
                .sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableGrid {
    pub column_widths_in: Vec<f64>,
    pub rows: Vec<Vec<TableCell>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableCell {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderModel {
    pub blocks: Vec<Block>,
    pub distance_from_top_in: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterModel {
    pub blocks: Vec<Block>,
    /// Fixed distance from the bottom page edge; the footer does not flow
    /// with the body.
    pub distance_from_bottom_in: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentModel {
    pub page: PageGeometry,
    pub font_family: String,
    pub body_font_size_pt: f64,
    pub header: HeaderModel,
    pub body: Vec<Block>,
    pub footer: FooterModel,
}

// Radiographs

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadiographCell {
    pub label: String,
    pub size: Size,
    /// `None` for an unfilled slot.
    pub image: Option<PlacedImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadiographGrid {
    pub rows: usize,
    pub columns: usize,
    pub column_width_in: f64,
    /// Uniform scale applied to every slot, never below 1.
    pub scale: f64,
    pub cells: Vec<RadiographCell>,
}

/// Caption under a radiograph slot.
pub fn slot_label(slot: usize) -> String {
    if slot == 0 {
        "Pre-Treatment".to_string()
    } else {
        format!("Radiograph {}", slot + 1)
    }
}

fn slot_cap(image: &ImageDescriptor) -> Size {
    if image.is_landscape() {
        LANDSCAPE_CAP
    } else {
        PORTRAIT_CAP
    }
}

/// Lay out the radiograph grid into `available_height_in` of vertical space,
/// reserving `caption_height_in` under each row for the slot labels.
pub fn layout_radiograph_grid(
    config: &RadiographConfig,
    content_width_in: f64,
    available_height_in: f64,
    caption_height_in: f64,
) -> Option<RadiographGrid> {
    if config.slots == 0 {
        return None;
    }
    let columns = config.columns.max(1);
    let rows = config.slots.div_ceil(columns);
    let column_width_in = content_width_in / columns as f64;

    let images: Vec<Option<&ImageDescriptor>> = (0..config.slots)
        .map(|slot| config.images.get(slot).and_then(Option::as_ref))
        .collect();
    let base: Vec<Size> = images
        .iter()
        .map(|image| match image {
            Some(image) => fit_image(slot_cap(image), image.aspect_ratio),
            None => LANDSCAPE_CAP,
        })
        .collect();

    let image_height: f64 = base
        .chunks(columns)
        .map(|row| row.iter().map(|s| s.height_in).fold(0.0, f64::max))
        .sum();
    let widest = base.iter().map(|s| s.width_in).fold(0.0, f64::max);

    let room = available_height_in - rows as f64 * caption_height_in;
    let height_scale = if image_height > 0.0 {
        room / image_height
    } else {
        1.0
    };
    let width_scale = if widest > 0.0 {
        column_width_in / widest
    } else {
        1.0
    };
    let scale = height_scale.min(width_scale).max(1.0);

    debug!(
        slots = config.slots,
        rows,
        columns,
        scale,
        available_height_in,
        "radiograph grid"
    );

    let cells = images
        .iter()
        .zip(&base)
        .enumerate()
        .map(|(slot, (image, size))| {
            let mut size = size.scale(scale);
            if size.width_in > column_width_in {
                size = size.scale(column_width_in / size.width_in);
            }
            RadiographCell {
                label: slot_label(slot),
                size,
                image: image.map(|image| PlacedImage::new(image, size)),
            }
        })
        .collect();

    Some(RadiographGrid {
        rows,
        columns,
        column_width_in,
        scale,
        cells,
    })
}

impl RadiographGrid {
    pub fn into_block(self, size_pt: f64) -> Block {
        let columns = self.columns;
        let mut cells: Vec<TableCell> = self
            .cells
            .into_iter()
            .map(|cell| {
                let visual = match cell.image {
                    Some(image) => Block::Image {
                        image,
                        alignment: Alignment::Center,
                    },
                    None => Block::Placeholder { size: cell.size },
                };
                TableCell {
                    blocks: vec![visual, Block::text(&cell.label, size_pt, Alignment::Center)],
                }
            })
            .collect();
        // Pad the last row so every row has the same number of cells.
        cells.resize_with(self.rows * columns, TableCell::default);

        let mut rows = Vec::with_capacity(self.rows);
        let mut cells = cells.into_iter();
        for _ in 0..self.rows {
            rows.push(cells.by_ref().take(columns).collect());
        }

        Block::Table(TableGrid {
            column_widths_in: vec![self.column_width_in; columns],
            rows,
        })
    }
}

// Header, footer, signature

fn header_lines(
    config: &HeaderConfig,
    fields: &MergeFields,
    body_size_pt: f64,
    alignment: Alignment,
) -> Vec<Block> {
    config
        .lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let text = render_or_raw(&format!("header_line_{index}"), &line.text, fields);
            Block::Paragraph {
                runs: vec![TextRun {
                    text,
                    bold: line.bold,
                    size_pt: line.size_pt.unwrap_or(body_size_pt),
                }],
                alignment,
            }
        })
        .collect()
}

pub fn layout_header(
    config: &HeaderConfig,
    page: &PageGeometry,
    fields: &MergeFields,
    body_size_pt: f64,
) -> HeaderModel {
    let logo = config.logo.as_ref().map(|logo| {
        let width = config.logo_width_in.min(page.content.width_in);
        PlacedImage::new(logo, image_at_width(logo, width))
    });

    let blocks = match config.layout {
        HeaderLayout::SingleColumn | HeaderLayout::StackedCenter => {
            let alignment = if config.layout == HeaderLayout::StackedCenter {
                Alignment::Center
            } else {
                Alignment::Left
            };
            let mut blocks: Vec<Block> = logo
                .map(|image| Block::Image { image, alignment })
                .into_iter()
                .collect();
            blocks.extend(header_lines(config, fields, body_size_pt, alignment));
            blocks
        }
        HeaderLayout::LogoLeftTextRight => {
            let lines = header_lines(config, fields, body_size_pt, Alignment::Right);
            match logo {
                Some(image) => {
                    let logo_width = image.size.width_in;
                    vec![Block::Table(TableGrid {
                        column_widths_in: vec![
                            logo_width,
                            (page.content.width_in - logo_width).max(0.0),
                        ],
                        rows: vec![vec![
                            TableCell {
                                blocks: vec![Block::Image {
                                    image,
                                    alignment: Alignment::Left,
                                }],
                            },
                            TableCell { blocks: lines },
                        ]],
                    })]
                }
                None => lines,
            }
        }
    };

    HeaderModel {
        blocks,
        distance_from_top_in: (page.margins.top - FOOTER_INSET_IN).max(0.0),
    }
}

pub fn layout_footer(
    config: &FooterConfig,
    page: &PageGeometry,
    fields: &MergeFields,
    body_size_pt: f64,
) -> FooterModel {
    let text = render_or_raw("footer", &config.text, fields);
    let mut blocks: Vec<Block> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Block::text(line, body_size_pt, Alignment::Center))
        .collect();

    if let Some(image) = &config.image {
        let width = config.image_width_in.min(page.content.width_in);
        let block = Block::Image {
            image: PlacedImage::new(image, image_at_width(image, width)),
            alignment: Alignment::Center,
        };
        match config.image_position {
            FooterImagePosition::Above => blocks.insert(0, block),
            FooterImagePosition::Below => blocks.push(block),
        }
    }

    FooterModel {
        blocks,
        distance_from_bottom_in: (page.margins.bottom - FOOTER_INSET_IN).max(0.0),
    }
}

pub fn layout_signature(
    config: &SignatureConfig,
    fields: &MergeFields,
    body_size_pt: f64,
) -> Vec<Block> {
    let mut blocks = Vec::new();
    let closing = render_or_raw("signature_closing", &config.closing, fields);
    if !closing.trim().is_empty() {
        blocks.push(Block::text(&closing, body_size_pt, Alignment::Left));
    }
    match &config.image {
        Some(image) => blocks.push(Block::Image {
            image: PlacedImage::new(image, image_at_width(image, config.image_width_in)),
            alignment: Alignment::Left,
        }),
        None => blocks.push(Block::blank(body_size_pt)),
    }
    if !config.name.trim().is_empty() {
        blocks.push(Block::Paragraph {
            runs: vec![TextRun {
                text: config.name.clone(),
                bold: true,
                size_pt: body_size_pt,
            }],
            alignment: Alignment::Left,
        });
    }
    if !config.credentials.trim().is_empty() {
        blocks.push(Block::text(&config.credentials, body_size_pt, Alignment::Left));
    }
    blocks
}

// Body

/// The letter sections as paragraphs, separated by blank lines.
pub fn letter_body(letter: &ReferralBlocks, size_pt: f64) -> Vec<Block> {
    let comments = letter.comments_line();
    let mut sections: Vec<Vec<&str>> = vec![
        letter.patient_meta.iter().map(String::as_str).collect(),
        vec![letter.salutation.as_str()],
        vec![letter.intro_paragraph.as_str()],
        vec![letter.tooth_area_line.as_str()],
        letter.consultation_lines.iter().map(String::as_str).collect(),
    ];
    if !letter.completion_lines.is_empty() {
        sections.push(letter.completion_lines.iter().map(String::as_str).collect());
    }
    sections.push(vec![comments.as_str()]);
    sections.push(vec![letter.closing.as_str()]);

    let mut blocks = Vec::new();
    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            blocks.push(Block::blank(size_pt));
        }
        blocks.extend(section.iter().map(|line| Block::letter_line(line, size_pt)));
    }
    blocks
}

/// Lay out the referral document. Image aspect ratios are taken as stored;
/// see [`crate::export::build_referral_document`] for the probing variant.
pub fn layout_referral_document(data: &NoteData, template: &ReferralTemplate) -> DocumentModel {
    let page = PageGeometry::letter(template.margins);
    let size = template.body_font_size_pt;
    let fields = MergeFields::new(data, template);

    let letter = build_referral_blocks(data, template.include_post_op);
    let mut body = letter_body(&letter, size);
    body.push(Block::blank(size));
    body.extend(layout_signature(&template.signature, &fields, size));

    let used: f64 = body
        .iter()
        .map(|block| block.estimated_height_in(&page, size))
        .sum();
    let line = line_height_in(size);
    let available = (page.content.height_in - used - line).max(0.0);
    debug!(
        estimated_text_in = used,
        available_in = available,
        "referral body measured"
    );

    if let Some(grid) =
        layout_radiograph_grid(&template.radiographs, page.content.width_in, available, line)
    {
        body.push(Block::blank(size));
        body.push(grid.into_block(size));
    }

    DocumentModel {
        page,
        font_family: template.font_family.clone(),
        body_font_size_pt: size,
        header: layout_header(&template.header, &page, &fields, size),
        body,
        footer: layout_footer(&template.footer, &page, &fields, size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_wrap_per_segment() {
        assert_eq!(estimate_lines("", 10), 1);
        assert_eq!(estimate_lines("0123456789", 10), 1);
        assert_eq!(estimate_lines("0123456789a", 10), 2);
        assert_eq!(estimate_lines("abc\n\nabc", 10), 3);
    }

    #[test]
    fn chars_per_line_follows_font_size() {
        let page = PageGeometry::letter(Margins::default());
        // 7 in × 72 pt / (11 pt × 0.5)
        assert_eq!(page.chars_per_line(11.0), 91);
        assert_eq!(page.chars_per_line(0.0), 1);
    }
}
