use endo_core::models::image::ImageDescriptor;
use endo_core::models::note::NoteData;
use endo_core::models::referral_template::{
    FooterImagePosition, HeaderLayout, HeaderLine, Margins, RadiographConfig, ReferralTemplate,
};
use endo_export::layout::{
    Alignment, Block, PageGeometry, Size, fit_image, layout_footer, layout_header,
    layout_radiograph_grid, layout_referral_document,
};
use endo_export::render::MergeFields;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn image(aspect_ratio: Option<f64>) -> ImageDescriptor {
    ImageDescriptor {
        file_name: "x.png".to_string(),
        data_url: "data:image/png;base64,".to_string(),
        width_px: 0,
        height_px: 0,
        aspect_ratio,
    }
}

#[test]
fn content_box_follows_margins() {
    let page = PageGeometry::letter(Margins {
        top: 1.0,
        right: 1.0,
        bottom: 1.0,
        left: 1.0,
    });
    assert!(close(page.content.width_in, 6.5));
    assert!(close(page.content.height_in, 9.0));
}

#[test]
fn images_fit_without_distortion() {
    let bounds = Size::new(3.0, 2.25);
    assert_eq!(fit_image(bounds, Some(2.0)), Size::new(3.0, 1.5));
    assert_eq!(fit_image(bounds, Some(0.5)), Size::new(1.125, 2.25));
    assert_eq!(fit_image(bounds, None), bounds);
    assert_eq!(fit_image(bounds, Some(0.0)), bounds);
}

#[test]
fn empty_grid_scales_up_to_the_column_width() {
    let grid = layout_radiograph_grid(&RadiographConfig::default(), 7.0, 100.0, 0.2).unwrap();
    assert_eq!((grid.rows, grid.columns), (1, 2));
    assert!(close(grid.scale, 3.5 / 3.0));
    assert!(close(grid.cells[0].size.width_in, 3.5));
    assert!(close(grid.cells[0].size.height_in, 2.625));
    assert!(grid.cells.iter().all(|c| c.image.is_none()));
}

#[test]
fn grid_never_shrinks_below_its_caps() {
    let grid = layout_radiograph_grid(&RadiographConfig::default(), 7.0, 0.0, 0.2).unwrap();
    assert!(close(grid.scale, 1.0));
    assert_eq!(grid.cells[1].size, Size::new(3.0, 2.25));
}

#[test]
fn slots_are_labelled_and_wrap_into_rows() {
    let config = RadiographConfig {
        slots: 3,
        columns: 2,
        images: vec![None, Some(image(Some(0.75)))],
    };
    let grid = layout_radiograph_grid(&config, 7.0, 0.0, 0.2).unwrap();
    assert_eq!(grid.rows, 2);
    let labels: Vec<&str> = grid.cells.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["Pre-Treatment", "Radiograph 2", "Radiograph 3"]);
    assert!(close(grid.cells[1].size.width_in, 1.8));
    assert!(close(grid.cells[1].size.height_in, 2.4));
    assert!(grid.cells[1].image.is_some());
}

#[test]
fn no_slots_means_no_grid() {
    let config = RadiographConfig {
        slots: 0,
        ..RadiographConfig::default()
    };
    assert!(layout_radiograph_grid(&config, 7.0, 5.0, 0.2).is_none());
}

#[test]
fn logo_without_ratio_uses_three_to_one() {
    let mut template = ReferralTemplate::default();
    template.header.layout = HeaderLayout::LogoLeftTextRight;
    template.header.logo = Some(image(None));
    template.header.lines = vec![HeaderLine {
        text: "Endodontic Associates".to_string(),
        bold: true,
        size_pt: Some(14.0),
    }];
    let page = PageGeometry::letter(template.margins);
    let header = layout_header(&template.header, &page, &MergeFields::default(), 11.0);

    let [Block::Table(grid)] = header.blocks.as_slice() else {
        panic!("expected a single table, got {:?}", header.blocks);
    };
    assert!(close(grid.column_widths_in[0], 1.5));
    let Block::Image { image, .. } = &grid.rows[0][0].blocks[0] else {
        panic!("expected the logo in the first cell");
    };
    assert!(close(image.size.height_in, 0.5));
    let Block::Paragraph { alignment, runs } = &grid.rows[0][1].blocks[0] else {
        panic!("expected header text in the second cell");
    };
    assert_eq!(*alignment, Alignment::Right);
    assert!(runs[0].bold);
}

#[test]
fn stacked_header_is_centered_and_renders_merge_fields() {
    let mut template = ReferralTemplate::default();
    template.header.layout = HeaderLayout::StackedCenter;
    template.header.lines = vec![
        HeaderLine {
            text: "Re: {{ patient_name }}".to_string(),
            ..HeaderLine::default()
        },
        HeaderLine {
            text: "Broken {{ oops".to_string(),
            ..HeaderLine::default()
        },
    ];
    let fields = MergeFields {
        patient_name: "Jane Roe".to_string(),
        ..MergeFields::default()
    };
    let page = PageGeometry::letter(template.margins);
    let header = layout_header(&template.header, &page, &fields, 11.0);

    let texts: Vec<String> = header.blocks.iter().filter_map(Block::plain_text).collect();
    assert_eq!(texts, ["Re: Jane Roe", "Broken {{ oops"]);
    assert!(header.blocks.iter().all(|b| matches!(
        b,
        Block::Paragraph {
            alignment: Alignment::Center,
            ..
        }
    )));
}

#[test]
fn footer_image_position_and_pinning() {
    let mut template = ReferralTemplate::default();
    template.footer.text = "123 Main St\nSpringfield".to_string();
    template.footer.image = Some(image(Some(4.0)));
    let page = PageGeometry::letter(template.margins);

    template.footer.image_position = FooterImagePosition::Above;
    let footer = layout_footer(&template.footer, &page, &MergeFields::default(), 9.0);
    assert!(matches!(footer.blocks[0], Block::Image { .. }));
    assert_eq!(footer.blocks.len(), 3);
    assert!(close(footer.distance_from_bottom_in, 0.5));

    template.footer.image_position = FooterImagePosition::Below;
    let footer = layout_footer(&template.footer, &page, &MergeFields::default(), 9.0);
    let Some(Block::Image { image, .. }) = footer.blocks.last() else {
        panic!("expected the footer image last");
    };
    assert_eq!(image.size, Size::new(2.0, 0.5));
}

#[test]
fn document_body_bolds_letter_labels_and_ends_with_radiographs() {
    let mut data = NoteData::default();
    data.patient_name = "Jane Roe".to_string();
    let model = layout_referral_document(&data, &ReferralTemplate::default());

    let Block::Paragraph { runs, .. } = &model.body[0] else {
        panic!("expected the patient name line first");
    };
    assert_eq!(runs[0].text, "Patient Name:");
    assert!(runs[0].bold);
    assert_eq!(runs[1].text, " Jane Roe");
    assert!(!runs[1].bold);

    let Some(Block::Table(grid)) = model.body.last() else {
        panic!("expected the radiograph grid last");
    };
    assert_eq!(grid.rows.len(), 1);
    assert_eq!(grid.rows[0].len(), 2);
    assert_eq!(
        grid.rows[0][0].blocks[1].plain_text().as_deref(),
        Some("Pre-Treatment")
    );
}

#[test]
fn layout_is_deterministic() {
    let data = NoteData::default();
    let template = ReferralTemplate::default();
    assert_eq!(
        layout_referral_document(&data, &template),
        layout_referral_document(&data, &template)
    );
}
