//! Dashboard application entry point.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use eframe::egui::{self, ComboBox, Context, RichText, Slider, Ui};
use tracing::{error, info};

use ts_agg::refresh;
use ts_core::{FilterState, Session, YearFilter};
use ts_data::{read_catalog, RecordStore};
use ts_views::{theme, Dashboard, WorldOutline};

const ALL_GENRES: &str = "All genres";
const ALL_RATINGS: &str = "All ratings";

/// Top-level application state.
struct TitlescopeApp {
    phase: AppPhase,
}

enum AppPhase {
    /// Store loaded, dashboard live.
    Ready(Box<ReadyState>),
    /// Source data failed to load. Terminal for the session; no dashboard
    /// runs against a missing store.
    Failed { message: String },
}

struct ReadyState {
    session: Session,
    dashboard: Dashboard,
    controls: Controls,
}

/// The direct-write controls: year slider plus genre/rating selectors.
struct Controls {
    year: i32,
    year_bounds: (i32, i32),
    genre: String,
    genres: Vec<String>,
    rating: String,
    ratings: Vec<String>,
}

impl Controls {
    fn new(store: &RecordStore, filters: &FilterState) -> Self {
        let year_bounds = store.year_bounds().unwrap_or((2000, 2000));
        let year = match filters.year {
            Some(YearFilter::Single(year)) => year,
            _ => year_bounds.1,
        };
        Self {
            year,
            year_bounds,
            genre: ALL_GENRES.to_owned(),
            genres: store.genres(),
            rating: ALL_RATINGS.to_owned(),
            ratings: store.ratings(),
        }
    }

    /// Draw the controls, writing changed values straight into the filter
    /// state. Returns whether anything changed.
    fn ui(&mut self, ui: &mut Ui, filters: &mut FilterState) -> bool {
        let mut dirty = false;

        ui.heading("Filters");
        ui.add_space(8.0);

        ui.label(RichText::new("Release year").color(theme::MUTED));
        let (min, max) = self.year_bounds;
        if ui.add(Slider::new(&mut self.year, min..=max)).changed() {
            filters.year = Some(YearFilter::Single(self.year));
            dirty = true;
        }
        ui.add_space(8.0);

        ui.label(RichText::new("Genre").color(theme::MUTED));
        let mut genre_changed = false;
        ComboBox::from_id_source("genre")
            .width(180.0)
            .selected_text(self.genre.clone())
            .show_ui(ui, |ui| {
                genre_changed |= ui
                    .selectable_value(&mut self.genre, ALL_GENRES.to_owned(), ALL_GENRES)
                    .changed();
                for genre in &self.genres {
                    genre_changed |= ui
                        .selectable_value(&mut self.genre, genre.clone(), genre)
                        .changed();
                }
            });
        if genre_changed {
            filters.genre = (self.genre != ALL_GENRES).then(|| self.genre.clone());
            dirty = true;
        }
        ui.add_space(8.0);

        ui.label(RichText::new("Rating").color(theme::MUTED));
        let mut rating_changed = false;
        ComboBox::from_id_source("rating")
            .width(180.0)
            .selected_text(self.rating.clone())
            .show_ui(ui, |ui| {
                rating_changed |= ui
                    .selectable_value(&mut self.rating, ALL_RATINGS.to_owned(), ALL_RATINGS)
                    .changed();
                for rating in &self.ratings {
                    rating_changed |= ui
                        .selectable_value(&mut self.rating, rating.clone(), rating)
                        .changed();
                }
            });
        if rating_changed {
            filters.rating = (self.rating != ALL_RATINGS).then(|| self.rating.clone());
            dirty = true;
        }

        ui.separator();
        ui.label(RichText::new("Chart selections").color(theme::MUTED));
        ui.label(format!(
            "Country: {}",
            filters.selected_country.as_deref().unwrap_or("All countries")
        ));
        ui.label(format!(
            "Type: {}",
            filters
                .selected_type
                .map(|ty| ty.label())
                .unwrap_or("All types")
        ));
        ui.label(format!(
            "Director: {}",
            filters
                .selected_director
                .as_deref()
                .unwrap_or("All directors")
        ));

        dirty
    }
}

impl TitlescopeApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let phase = match locate_inputs().and_then(|(catalog, world)| load(&catalog, &world)) {
            Ok(state) => AppPhase::Ready(Box::new(state)),
            Err(e) => {
                error!(error = %e, "failed to load source data");
                AppPhase::Failed {
                    message: format!("{e:#}"),
                }
            }
        };
        Self { phase }
    }
}

impl eframe::App for TitlescopeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        match &mut self.phase {
            AppPhase::Failed { message } => draw_error(ctx, message),
            AppPhase::Ready(state) => state.update(ctx),
        }
    }
}

impl ReadyState {
    fn update(&mut self, ctx: &Context) {
        let mut dirty = false;

        egui::SidePanel::left("controls")
            .default_width(220.0)
            .show(ctx, |ui| {
                dirty |= self.controls.ui(ui, &mut self.session.filters);
            });

        // Control writes land before the charts draw this frame.
        if dirty {
            refresh(self.session.store(), &self.session.filters, &mut self.dashboard);
        }

        let mut events = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            events = self.dashboard.ui(ui, &self.session.filters);
        });

        // Chart clicks go through the toggle protocol, then a full refresh;
        // the clicked chart re-renders along with every sibling.
        if !events.is_empty() {
            for event in events {
                self.session.filters.toggle(event);
            }
            refresh(self.session.store(), &self.session.filters, &mut self.dashboard);
            ctx.request_repaint();
        }
    }
}

/// Catalog path from argv or a file dialog; the boundary dataset defaults
/// to `world.geojson` next to the catalog.
fn locate_inputs() -> Result<(PathBuf, PathBuf)> {
    let mut args = std::env::args().skip(1);

    let catalog = match args.next() {
        Some(path) => PathBuf::from(path),
        None => rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_title("Select the title catalog")
            .pick_file()
            .context("no catalog file selected")?,
    };
    let world = match args.next() {
        Some(path) => PathBuf::from(path),
        None => catalog.with_file_name("world.geojson"),
    };
    Ok((catalog, world))
}

fn load(catalog: &Path, world: &Path) -> Result<ReadyState> {
    let rows = read_catalog(catalog)
        .with_context(|| format!("reading catalog {}", catalog.display()))?;
    let store = RecordStore::load(rows);
    if store.is_empty() {
        bail!("catalog {} contains no usable records", catalog.display());
    }

    let world_text = std::fs::read_to_string(world)
        .with_context(|| format!("reading boundary data {}", world.display()))?;
    let outline = WorldOutline::from_geojson(&world_text)?;

    let session = Session::new(store);
    let controls = Controls::new(session.store(), &session.filters);
    let mut dashboard = Dashboard::new(outline);
    refresh(session.store(), &session.filters, &mut dashboard);

    Ok(ReadyState {
        session,
        dashboard,
        controls,
    })
}

fn draw_error(ctx: &Context, message: &str) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading(RichText::new("Failed to load data").color(theme::SELECT));
            ui.add_space(12.0);
            ui.label(RichText::new(message).color(theme::TEXT));
            ui.add_space(12.0);
            ui.label(
                RichText::new("Usage: titlescope <catalog.csv> [world.geojson]")
                    .color(theme::MUTED),
            );
        });
    });
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("starting titlescope");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    eframe::run_native(
        "Titlescope",
        options,
        Box::new(|cc| Box::new(TitlescopeApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run app: {e}"))?;

    Ok(())
}
