use super::*;
use crate::app::{Message, Model, update};
use crate::document::Document;
use crate::ui::view_model::Highlight;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn model_for(text: &str, size: (u16, u16)) -> Model {
    Model::new(Document::from_text(text), size)
}

fn draw(model: &Model) -> Buffer {
    let rows = u16::try_from(model.viewport.page_rows() + 1).unwrap();
    let mut terminal = create_test_terminal(model.viewport.width(), rows);
    terminal
        .draw(|frame| {
            let view = ViewModel::from_model(model);
            render(&view, model.active_toast(), frame);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[test]
fn test_render_shows_line_numbers_and_text() {
    let model = model_for("alpha\nbeta\ngamma", (30, 5));
    let buffer = draw(&model);
    assert_eq!(row_text(&buffer, 0), "      1 alpha");
    assert_eq!(row_text(&buffer, 2), "      3 gamma");
    assert_eq!(row_text(&buffer, 3), "");
}

#[test]
fn test_render_status_bar_position() {
    let mut model = model_for("alpha\nbeta\ngamma", (30, 5));
    model = update(model, Message::NextLine);
    let buffer = draw(&model);
    assert_eq!(row_text(&buffer, 4), "2/3");
    assert_eq!(row_text(&buffer, 0), "      2 beta");
}

#[test]
fn test_render_without_line_numbers() {
    let model = update(model_for("alpha\nbeta", (30, 5)), Message::ToggleLineNumbers);
    let buffer = draw(&model);
    assert_eq!(row_text(&buffer, 0), "alpha");
}

#[test]
fn test_render_only_fills_content_rows() {
    let text = (1..=20).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
    let model = model_for(&text, (30, 5));
    let buffer = draw(&model);
    assert_eq!(row_text(&buffer, 3), "      4 line 4");
    assert_eq!(row_text(&buffer, 4), "1/20");
}

#[test]
fn test_render_filtering_skips_non_matching_lines() {
    let mut model = model_for("apple\nbanana\ncherry\nbanana split", (30, 5));
    model.pattern = "banana".to_string();
    model = update(model, Message::ToggleFiltering);
    let buffer = draw(&model);
    assert_eq!(row_text(&buffer, 0), "      2 banana");
    assert_eq!(row_text(&buffer, 1), "      4 banana split");
    assert_eq!(row_text(&buffer, 2), "");
    assert!(row_text(&buffer, 4).contains("[filter]"));
}

#[test]
fn test_render_clips_by_left_edge() {
    let mut model = model_for("0123456789", (30, 5));
    model = update(model, Message::ToggleLineNumbers);
    for _ in 0..4 {
        model = update(model, Message::NextColumn);
    }
    let buffer = draw(&model);
    assert_eq!(row_text(&buffer, 0), "456789");
}

#[test]
fn test_render_highlights_matches() {
    let mut model = model_for("say banana", (30, 5));
    model.pattern = "nan".to_string();
    model = update(model, Message::ToggleLineNumbers);
    let buffer = draw(&model);
    let highlighted = crate::ui::style::highlight_style().fg;
    assert_eq!(buffer[(6, 0)].fg, highlighted.unwrap());
    assert_eq!(buffer[(8, 0)].fg, highlighted.unwrap());
    assert_ne!(buffer[(5, 0)].fg, highlighted.unwrap());
    assert_ne!(buffer[(9, 0)].fg, highlighted.unwrap());
}

#[test]
fn test_render_capture_echo() {
    let mut model = model_for("alpha\nbanana", (30, 5));
    model = update(model, Message::StartCapture);
    for c in "ban".chars() {
        model = update(model, Message::CaptureInput(c));
    }
    let buffer = draw(&model);
    assert_eq!(row_text(&buffer, 4), "1/2         /ban");
}

#[test]
fn test_render_empty_document() {
    let model = model_for("", (30, 5));
    let buffer = draw(&model);
    assert_eq!(row_text(&buffer, 0), "");
    assert_eq!(row_text(&buffer, 4), "0/0");
}

#[test]
fn test_render_toast_in_status_row() {
    let mut model = model_for("alpha", (60, 5));
    model = update(model, Message::StartCapture);
    model = update(model, Message::CaptureInput('z'));
    model = update(model, Message::EndCapture);
    let buffer = draw(&model);
    assert!(row_text(&buffer, 4).contains("Pattern not found: z"));
}

#[test]
fn test_render_tiny_terminal_does_not_panic() {
    let model = model_for("alpha\nbeta", (1, 1));
    let buffer = draw(&model);
    assert_eq!(buffer.area.height, 1);
}

#[test]
fn test_clip_and_highlight_splits_segments() {
    let spans = clip_and_highlight("abcdef", &[Highlight { column: 2, len: 2 }], 0);
    let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(texts, vec!["ab", "cd", "ef"]);
    assert_eq!(spans[1].style, crate::ui::style::highlight_style());
}

#[test]
fn test_clip_and_highlight_with_left_edge() {
    let spans = clip_and_highlight("abcdef", &[Highlight { column: 2, len: 2 }], 3);
    let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(texts, vec!["d", "ef"]);
}

#[test]
fn test_clip_and_highlight_drops_cut_wide_char() {
    let spans = clip_and_highlight("日本語", &[], 1);
    let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(texts, vec!["本語"]);
}

#[test]
fn test_clip_past_end_is_empty() {
    assert!(clip_and_highlight("abc", &[], 10).is_empty());
}

#[test]
fn test_render_highlight_after_tab_lines_up_with_text() {
    let mut model = model_for("\tfoo bar", (30, 5));
    model.pattern = "foo".to_string();
    model = update(model, Message::ToggleLineNumbers);
    let buffer = draw(&model);
    let highlighted = crate::ui::style::highlight_style().fg.unwrap();
    let view = ViewModel::from_model(&model);
    assert_eq!(view.rows[0].highlights, vec![Highlight { column: 0, len: 3 }]);
    for x in 0..buffer.area.width {
        let cell = &buffer[(x, 0)];
        match cell.symbol() {
            "f" | "o" => assert_eq!(cell.fg, highlighted),
            "b" | "a" | "r" => assert_ne!(cell.fg, highlighted),
            _ => {}
        }
    }
}

#[test]
fn test_clip_and_highlight_tab_before_match() {
    let spans = clip_and_highlight("\tfoo bar", &[Highlight { column: 0, len: 3 }], 0);
    let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(texts, vec!["\t", "foo", " bar"]);
    assert_eq!(spans[1].style, crate::ui::style::highlight_style());
    assert_ne!(spans[0].style, crate::ui::style::highlight_style());
}

#[test]
fn test_render_status_shows_idle_pattern_dimmed() {
    let mut model = model_for("alpha\nbanana", (30, 5));
    model = update(model, Message::StartCapture);
    model = update(model, Message::CaptureInput('b'));
    model = update(model, Message::EndCapture);
    let buffer = draw(&model);
    assert_eq!(row_text(&buffer, 4), "2/2         b");
}
