use crate::export::document::{Column, DocumentWriter, RowKind, TableRow};
use crate::utils::formatting::truncate;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str, TextStr};

/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.52;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,
    content: Option<Content>,

    title: String,
    columns: Vec<Column>,
    col_widths: Vec<f32>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    padding: f32,
    cursor_y: f32,
    body_rows_on_page: usize,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

/// Encode text for the WinAnsi-encoded standard fonts; unmappable chars become '?'.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            c if c.is_whitespace() => b' ',
            _ => b'?',
        })
        .collect()
}

impl PdfManager {
    pub fn new(title: &str, columns: &[Column]) -> Self {
        let mut pdf = Pdf::new();

        // IDs handled by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        let mut manager = Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,
            content: None,

            title: title.to_string(),
            columns: columns.to_vec(),
            col_widths: Vec::new(),

            page_w: 595.0,
            page_h: 842.0,
            margin: 40.0,
            padding: 4.0,
            cursor_y: 0.0,
            body_rows_on_page: 0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
        };
        manager.col_widths = manager.compute_col_widths();
        manager
    }

    /// Generate a new unique Ref
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Scale the column weights to the usable page width.
    fn compute_col_widths(&self) -> Vec<f32> {
        let total: f32 = self.columns.iter().map(|c| c.weight).sum();
        let usable = self.page_w - 2.0 * self.margin;

        self.columns
            .iter()
            .map(|c| {
                if total > 0.0 {
                    c.weight / total * usable
                } else {
                    usable / self.columns.len().max(1) as f32
                }
            })
            .collect()
    }

    fn line_height(&self, size: f32) -> f32 {
        size * 1.25
    }

    fn table_width(&self) -> f32 {
        self.col_widths.iter().sum()
    }

    /// Lowest y a row may reach; the footer lives below it.
    fn bottom_limit(&self) -> f32 {
        self.margin + 10.0
    }

    /// Chars that fit in a column at the body font size.
    fn chars_for(&self, width: f32) -> usize {
        (((width - 2.0 * self.padding) / (self.font_size * AVG_GLYPH_WIDTH)) as usize).max(1)
    }

    /// Lines of each cell: wrapped for wrapping columns, clipped otherwise.
    fn layout_cells(&self, cells: &[String]) -> Vec<Vec<String>> {
        cells
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let width = self.col_widths.get(i).copied().unwrap_or(0.0);
                let chars = self.chars_for(width);
                let wraps = self.columns.get(i).is_some_and(|c| c.wrap);

                if wraps && !text.is_empty() {
                    textwrap::wrap(text, chars)
                        .into_iter()
                        .map(|l| l.into_owned())
                        .collect()
                } else {
                    vec![truncate(text, chars)]
                }
            })
            .collect()
    }

    fn row_height(&self, lines: &[Vec<String>], size: f32) -> f32 {
        let max_lines = lines.iter().map(Vec::len).max().unwrap_or(1).max(1);
        max_lines as f32 * self.line_height(size) + 2.0 * self.padding
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, font: &[u8], size: f32, text: &str) {
        let encoded = win_ansi(text);
        content.begin_text();
        content.set_font(Name(font), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&encoded));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(&self, content: &mut Content, y: f32, h: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(self.margin, y, self.table_width(), h);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Draw a row whose top edge is at `top`; returns its height.
    fn draw_row(
        &self,
        content: &mut Content,
        top: f32,
        lines: &[Vec<String>],
        font: &[u8],
        size: f32,
        band: Option<(f32, f32, f32)>,
    ) -> f32 {
        let h = self.row_height(lines, size);
        let bottom = top - h;
        let line_h = self.line_height(size);

        if let Some(rgb) = band {
            self.fill_band(content, bottom, h, rgb);
        }

        let mut x = self.margin;
        for (i, cell) in lines.iter().enumerate() {
            let w = self.col_widths.get(i).copied().unwrap_or(0.0);
            for (n, line) in cell.iter().enumerate() {
                let baseline = top - self.padding - (n as f32 + 1.0) * line_h + size * 0.25;
                self.draw_text(content, x + self.padding, baseline, font, size, line);
            }
            self.draw_cell_borders(content, x, bottom, w, h);
            x += w;
        }

        h
    }

    fn draw_page_header_footer(&self, content: &mut Content, page: usize) {
        // Title
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin,
            b"F2",
            self.title_font_size,
            &self.title,
        );

        // Page number
        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w / 2.0 - 15.0,
            self.margin - 20.0,
            b"F1",
            8.0,
            &pg,
        );
    }

    /// Write the stream of the current page
    fn finalize_page(&mut self) {
        if let (Some(id), Some(content)) = (self.current_content_id.take(), self.content.take()) {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Set the `Pages` node with count and kids
    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }
}

impl DocumentWriter for PdfManager {
    fn add_page(&mut self) {
        self.finalize_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);
            page.resources()
                .fonts()
                .pair(Name(b"F1"), self.font_id)
                .pair(Name(b"F2"), self.bold_font_id);
        }

        let mut content = Content::new();
        self.draw_page_header_footer(&mut content, self.page_refs.len());

        // table header
        let header: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| vec![c.header.to_string()])
            .collect();
        let top = self.page_h - self.margin - 20.0;
        let h = self.draw_row(
            &mut content,
            top,
            &header,
            b"F2",
            self.header_font_size,
            Some((0.85, 0.87, 0.90)),
        );

        self.cursor_y = top - h;
        self.body_rows_on_page = 0;
        self.current_content_id = Some(content_id);
        self.content = Some(content);
    }

    fn add_row(&mut self, row: &TableRow) -> bool {
        let Some(mut content) = self.content.take() else {
            return false;
        };

        let lines = self.layout_cells(&row.cells);
        let (font, size): (&[u8], f32) = match row.kind {
            RowKind::Body => (&b"F1"[..], self.font_size),
            RowKind::Total => (&b"F2"[..], self.header_font_size),
        };

        if self.cursor_y - self.row_height(&lines, size) < self.bottom_limit() {
            self.content = Some(content);
            return false;
        }

        let band = match row.kind {
            // zebra stripe
            RowKind::Body if self.body_rows_on_page % 2 == 1 => Some((0.96, 0.96, 0.96)),
            RowKind::Body => None,
            RowKind::Total => Some((0.90, 0.92, 0.95)),
        };

        let h = self.draw_row(&mut content, self.cursor_y, &lines, font, size, band);
        self.cursor_y -= h;
        if row.kind == RowKind::Body {
            self.body_rows_on_page += 1;
        }

        self.content = Some(content);
        true
    }

    fn finalize(mut self) -> Vec<u8> {
        if self.page_refs.is_empty() {
            self.add_page();
        }
        self.finalize_page();

        let info_id = self.fresh_ref();
        self.pdf
            .document_info(info_id)
            .title(TextStr(&self.title))
            .producer(TextStr(concat!("rworklog ", env!("CARGO_PKG_VERSION"))));

        // Build Catalog + Pages once, here
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        self.pdf.finish()
    }
}
