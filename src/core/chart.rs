//! Category breakdown chart: hours per category drawn as a pie into a PNG.

use crate::core::calculator::duration::hours;
use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use crate::ui::messages::warning;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontStyle, register_font};
use std::f64::consts::PI;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 500;
const FONT_FAMILY: &str = "sans-serif";

const BACKGROUND: RGBColor = RGBColor(0x1a, 0x1a, 0x2e);

/// Qualitative "Paired" palette, cycled when there are more categories.
const PALETTE: [RGBColor; 12] = [
    RGBColor(0xa6, 0xce, 0xe3),
    RGBColor(0x1f, 0x78, 0xb4),
    RGBColor(0xb2, 0xdf, 0x8a),
    RGBColor(0x33, 0xa0, 0x2c),
    RGBColor(0xfb, 0x9a, 0x99),
    RGBColor(0xe3, 0x1a, 0x1c),
    RGBColor(0xfd, 0xbf, 0x6f),
    RGBColor(0xff, 0x7f, 0x00),
    RGBColor(0xca, 0xb2, 0xd6),
    RGBColor(0x6a, 0x3d, 0x9a),
    RGBColor(0xff, 0xff, 0x99),
    RGBColor(0xb1, 0x59, 0x28),
];

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub const PLACEHOLDER_MESSAGE: &str = "No data available for the chart";
pub const NO_WORKED_TIME_MESSAGE: &str = "No worked time recorded for the chart";
pub const CHART_TITLE: &str = "Working hours by category";

/// Accumulated hours of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryHours {
    pub category: String,
    pub hours: f64,
}

/// Share of one category in the total, in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub hours: f64,
    pub percent: f64,
}

/// What ended up in the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutcome {
    /// A pie with one slice per category.
    Pie { slices: usize, labelled: bool },
    /// No entries: background with an explanatory message.
    Placeholder { labelled: bool },
    /// Entries exist but all of them last 00:00.
    NoWorkedTime { labelled: bool },
}

/// Sum hours per category, keeping the order in which categories first appear.
pub fn category_breakdown(entries: &[TimeEntry]) -> Vec<CategoryHours> {
    let mut out: Vec<CategoryHours> = Vec::new();

    for e in entries {
        let h = hours(e.duration());
        match out.iter_mut().find(|c| c.category == e.category) {
            Some(c) => c.hours += h,
            None => out.push(CategoryHours {
                category: e.category.clone(),
                hours: h,
            }),
        }
    }

    out
}

/// Percent of the total per category; empty when nothing was worked.
pub fn category_shares(breakdown: &[CategoryHours]) -> Vec<CategoryShare> {
    let total: f64 = breakdown.iter().map(|c| c.hours).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    breakdown
        .iter()
        .map(|c| CategoryShare {
            category: c.category.clone(),
            hours: c.hours,
            percent: c.hours / total * 100.0,
        })
        .collect()
}

fn chart_err<E: Display>(e: E) -> AppError {
    AppError::Chart(e.to_string())
}

fn font_candidates(preferred: Option<&Path>) -> Vec<PathBuf> {
    let mut v: Vec<PathBuf> = preferred.map(Path::to_path_buf).into_iter().collect();
    v.extend(SYSTEM_FONTS.iter().map(PathBuf::from));
    v
}

/// Register a TrueType font for chart text, once per process.
fn font_available(preferred: Option<&Path>) -> bool {
    static FONT_READY: OnceLock<bool> = OnceLock::new();

    *FONT_READY.get_or_init(|| {
        for path in font_candidates(preferred) {
            let Ok(bytes) = fs::read(&path) else {
                continue;
            };
            // plotters keeps a reference to the font data for the process lifetime
            let data: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            if register_font(FONT_FAMILY, FontStyle::Normal, data).is_ok() {
                return true;
            }
        }
        false
    })
}

fn text_style(size: f64, color: &RGBColor, pos: Pos) -> TextStyle<'static> {
    (FONT_FAMILY, size).into_font().color(color).pos(pos)
}

/// Point on the circle `angle` radians counter-clockwise from twelve o'clock.
fn polar(center: (i32, i32), radius: f64, angle: f64) -> (i32, i32) {
    (
        center.0 - (radius * angle.sin()).round() as i32,
        center.1 - (radius * angle.cos()).round() as i32,
    )
}

fn wedge(center: (i32, i32), radius: f64, from: f64, to: f64) -> Vec<(i32, i32)> {
    let steps = (((to - from) / (PI / 180.0)).ceil() as usize).max(1);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let a = from + (to - from) * i as f64 / steps as f64;
        points.push(polar(center, radius, a));
    }
    points
}

pub struct ChartLogic;

impl ChartLogic {
    /// Render the category chart for `entries` into the PNG at `path`,
    /// replacing any previous image.
    pub fn render(
        entries: &[TimeEntry],
        path: &Path,
        font: Option<&Path>,
    ) -> AppResult<ChartOutcome> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let labelled = font_available(font);
        if !labelled {
            warning("No TrueType font found for chart text; set `chart_font` in the config.");
        }

        let shares = category_shares(&category_breakdown(entries));

        let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&BACKGROUND).map_err(chart_err)?;

        if shares.is_empty() {
            let (message, outcome) = if entries.is_empty() {
                (PLACEHOLDER_MESSAGE, ChartOutcome::Placeholder { labelled })
            } else {
                (NO_WORKED_TIME_MESSAGE, ChartOutcome::NoWorkedTime { labelled })
            };

            if labelled {
                root.draw_text(
                    message,
                    &text_style(22.0, &WHITE, Pos::new(HPos::Center, VPos::Center)),
                    (WIDTH as i32 / 2, HEIGHT as i32 / 2),
                )
                .map_err(chart_err)?;
            }
            root.present().map_err(chart_err)?;
            return Ok(outcome);
        }

        let center = (300, 270);
        let radius = 190.0;

        if labelled {
            root.draw_text(
                CHART_TITLE,
                &text_style(24.0, &WHITE, Pos::new(HPos::Center, VPos::Top)),
                (WIDTH as i32 / 2, 18),
            )
            .map_err(chart_err)?;
        }

        // slices start at twelve o'clock and run counter-clockwise
        let mut angle = 0.0;
        for (i, share) in shares.iter().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            let sweep = share.percent / 100.0 * 2.0 * PI;

            root.draw(&Polygon::new(
                wedge(center, radius, angle, angle + sweep),
                color.filled(),
            ))
            .map_err(chart_err)?;

            if labelled {
                root.draw_text(
                    &format!("{:.1}%", share.percent),
                    &text_style(16.0, &BLACK, Pos::new(HPos::Center, VPos::Center)),
                    polar(center, radius * 0.62, angle + sweep / 2.0),
                )
                .map_err(chart_err)?;
            }

            angle += sweep;
        }

        // legend
        let legend_x = 560;
        for (i, share) in shares.iter().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            let y = 90 + i as i32 * 28;

            root.draw(&Rectangle::new(
                [(legend_x, y), (legend_x + 18, y + 18)],
                color.filled(),
            ))
            .map_err(chart_err)?;

            if labelled {
                root.draw_text(
                    &share.category,
                    &text_style(16.0, &WHITE, Pos::new(HPos::Left, VPos::Center)),
                    (legend_x + 28, y + 9),
                )
                .map_err(chart_err)?;
            }
        }

        root.present().map_err(chart_err)?;

        Ok(ChartOutcome::Pie {
            slices: shares.len(),
            labelled,
        })
    }
}
