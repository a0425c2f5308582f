//! Focus-map screen built with eframe/egui.
//!
//! This module defines [`FocusMapViewer`], which owns the user roster, the
//! scattered marker layout and the scatter configuration, and implements
//! [`eframe::App`] to draw the map and handle marker selection.

use eframe::App;
use glam::Vec2;
use scatter_core::{
    config::ScatterConfig,
    error::ScatterError,
    position::{Position, PositionSet},
    region::Region,
    scatter,
};
use tracing::{info, warn};

use crate::users::{User, mock_roster};

/// On-screen size of one avatar marker, in points.
pub const MARKER_EXTENT: f32 = 80.0;

/// Height of the bottom navigation strip markers must stay clear of.
pub const NAVBAR_HEIGHT: f32 = 80.0;

/// Main application state for the focus map.
///
/// [`FocusMapViewer`] glues together:
/// - The placement core: [`Region`], [`ScatterConfig`], [`scatter`].
/// - The mock user roster and avatar tiers.
/// - eframe/egui callbacks for drawing and marker selection.
///
/// The typical per-frame update is:
/// 1. Re-scatter if the map area changed since the last layout.
/// 2. Draw the nav strip and one marker per user.
/// 3. Handle clicks: a hit opens the profile popup for that user.
///
/// ### Fields
/// - `users` - Roster shown on the map, one marker each.
/// - `positions` - Accepted marker layout, paired with `users` by index.
/// - `cfg` - Separation distance and attempt budget for the scatter.
///
/// - `rng` - Random number generator used for scattering.
///
/// - `selected` - Index of the user whose profile popup is open.
/// - `scatter_error` - Last placement failure, shown in the status bar.
/// - `last_size` - Map-area size the current layout was scattered for.
/// - `next_wanderer` - Counter for naming synthetic drop-in users.
pub struct FocusMapViewer {
    users: Vec<User>,
    positions: PositionSet,
    cfg: ScatterConfig,

    rng: rand::rngs::ThreadRng,

    selected: Option<usize>,
    scatter_error: Option<ScatterError>,
    last_size: egui::Vec2,
    next_wanderer: u32,
}

impl FocusMapViewer {
    /// Creates a new viewer with the mock roster and an empty layout.
    ///
    /// The actual scatter happens on the first frame, once the map area is
    /// known; see [`FocusMapViewer::ensure_positions`].
    pub fn new() -> Self {
        Self {
            users: mock_roster(),
            positions: PositionSet::default(),
            cfg: ScatterConfig::default(),
            rng: rand::rng(),
            selected: None,
            scatter_error: None,
            last_size: egui::Vec2::ZERO,
            next_wanderer: 1,
        }
    }

    /// Scatters one marker per user into the lower band of a map area.
    ///
    /// On success the layout and `last_size` are replaced and any previous
    /// error is cleared. On failure the layout is emptied and the error is
    /// kept for the status bar; the screen stays usable so the user can
    /// resize the window or relax the separation distance.
    fn rescatter(&mut self, size: egui::Vec2) {
        self.last_size = size;
        self.selected = None;

        let scattered = Region::lower_band(size.x, size.y, NAVBAR_HEIGHT, MARKER_EXTENT)
            .and_then(|region| {
                scatter::scatter_positions(self.users.len(), &region, &self.cfg, &mut self.rng)
            });

        match scattered {
            Ok(set) => {
                self.positions = set;
                self.scatter_error = None;
            }
            Err(err) => {
                warn!(%err, "marker scatter failed");
                self.positions = PositionSet::default();
                self.scatter_error = Some(err);
            }
        }
    }

    /// Re-scatters when the map area changed or the roster outgrew the layout.
    ///
    /// A failed scatter is not retried until the geometry changes, so a
    /// too-small window does not re-run the sampler every frame.
    fn ensure_positions(&mut self, size: egui::Vec2) {
        if size != self.last_size
            || (self.scatter_error.is_none() && self.positions.len() != self.users.len())
        {
            self.rescatter(size);
        }
    }

    /// Drops one synthetic user onto the map, keeping the separation
    /// constraint against the existing markers.
    fn add_wanderer(&mut self) {
        let region = match Region::lower_band(
            self.last_size.x,
            self.last_size.y,
            NAVBAR_HEIGHT,
            MARKER_EXTENT,
        ) {
            Ok(region) => region,
            Err(err) => {
                self.scatter_error = Some(err);
                return;
            }
        };

        let existing: Vec<Vec2> = self.positions.iter().map(|p| p.as_vec2()).collect();

        match scatter::place_one(&existing, &region, &self.cfg, &mut self.rng) {
            Ok(p) => {
                let n = self.next_wanderer;
                self.next_wanderer += 1;
                let name = format!("Wanderer {n}");
                info!(name = %name, "user joined the map");

                self.users.push(User {
                    id: 100 + n,
                    name,
                    focus_sessions: n,
                    focus_minutes: n * 90,
                });
                self.positions.points.push(Position::from_vec2(p));
            }
            Err(err) => {
                warn!(%err, "no room for another marker");
                self.scatter_error = Some(err);
            }
        }
    }

    /// Converts a marker position to the screen position of its top-left
    /// corner inside the map rect.
    fn map_to_screen(p: Position, rect: egui::Rect) -> egui::Pos2 {
        egui::pos2(rect.min.x + p.left, rect.min.y + p.top)
    }

    /// Returns the index of the marker under `pointer`, if any.
    ///
    /// Each marker occupies the `MARKER_EXTENT`-sized square anchored at its
    /// position. Markers never overlap, so the first hit is the only hit.
    fn marker_at(&self, pointer: egui::Pos2, rect: egui::Rect) -> Option<usize> {
        let local = pointer - rect.min;
        self.positions.iter().position(|p| {
            local.x >= p.left
                && local.x < p.left + MARKER_EXTENT
                && local.y >= p.top
                && local.y < p.top + MARKER_EXTENT
        })
    }

    /// Builds the top panel UI (re-scatter controls, separation slider).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Re-scatter").clicked() {
                    self.rescatter(self.last_size);
                }

                if ui.button("Add wanderer").clicked() {
                    self.add_wanderer();
                }

                ui.separator();
                ui.add(
                    egui::Slider::new(&mut self.cfg.min_distance, 20.0..=300.0)
                        .text("min distance"),
                );
            });
        });
    }

    /// Builds the bottom status bar (marker count, closest pair, errors).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("markers = {}", self.positions.len()));
                if let Some(sep) = self.positions.min_separation() {
                    ui.label(format!("closest pair = {sep:.0}"));
                }
                if let Some(err) = &self.scatter_error {
                    ui.separator();
                    ui.colored_label(egui::Color32::LIGHT_RED, err.to_string());
                }
            });
        });
    }

    /// Shows the profile popup for the selected user.
    fn ui_profile_popup(&mut self, ctx: &egui::Context) {
        let Some(i) = self.selected else {
            return;
        };
        let user = self.users[i].clone();

        let mut open = true;
        let mut invite_sent = false;

        egui::Window::new(user.name.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(format!("Focus Sessions: {}", user.focus_sessions));
                ui.label(format!(
                    "Focus Time: {:.1} h",
                    user.focus_minutes as f32 / 60.0
                ));
                ui.label(user.avatar().label());

                ui.separator();
                if ui.button("Send Focus Invite").clicked() {
                    // Invite delivery belongs to the backend; just log it.
                    info!(user_id = user.id, "sending focus invite");
                    invite_sent = true;
                }
            });

        if !open || invite_sent {
            self.selected = None;
        }
    }

    /// Builds the central map: background, nav strip, markers, click handling.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::click());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                self.ensure_positions(rect.size());

                // Map background and the reserved nav strip.
                painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(24, 40, 32));
                let navbar = egui::Rect::from_min_max(
                    egui::pos2(rect.min.x, rect.max.y - NAVBAR_HEIGHT),
                    rect.max,
                );
                painter.rect_filled(navbar, 0.0, egui::Color32::from_rgb(16, 24, 20));

                // Marker selection.
                if response.clicked()
                    && let Some(pointer) = response.interact_pointer_pos()
                {
                    self.selected = self.marker_at(pointer, rect);
                }

                // Draw one marker per user, paired by index.
                for (i, (user, p)) in self.users.iter().zip(self.positions.iter()).enumerate() {
                    let corner = Self::map_to_screen(*p, rect);
                    let center = corner + egui::vec2(MARKER_EXTENT / 2.0, MARKER_EXTENT / 2.0);
                    let radius = MARKER_EXTENT / 2.0;

                    painter.circle_filled(center, radius, user.avatar().color());
                    if self.selected == Some(i) {
                        painter.circle_stroke(
                            center,
                            radius + 2.0,
                            egui::Stroke::new(2.0, egui::Color32::WHITE),
                        );
                    }

                    painter.text(
                        center + egui::vec2(0.0, radius + 4.0),
                        egui::Align2::CENTER_TOP,
                        &user.name,
                        egui::FontId::proportional(13.0),
                        egui::Color32::WHITE,
                    );
                }
            });
    }
}

impl App for FocusMapViewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
        self.ui_profile_popup(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 40.0), egui::vec2(800.0, 1200.0))
    }

    #[test]
    fn rescatter_pairs_every_user_with_a_marker() {
        let mut viewer = FocusMapViewer::new();

        viewer.rescatter(egui::vec2(800.0, 1200.0));

        assert!(viewer.scatter_error.is_none());
        assert_eq!(viewer.positions.len(), viewer.users.len());

        let region = Region::lower_band(800.0, 1200.0, NAVBAR_HEIGHT, MARKER_EXTENT).unwrap();
        for p in viewer.positions.iter() {
            assert!(region.contains(p.as_vec2()));
        }
    }

    #[test]
    fn layout_follows_window_resizes() {
        let mut viewer = FocusMapViewer::new();

        viewer.ensure_positions(egui::vec2(800.0, 1200.0));
        assert_eq!(viewer.last_size, egui::vec2(800.0, 1200.0));
        assert_eq!(viewer.positions.len(), viewer.users.len());

        viewer.ensure_positions(egui::vec2(1000.0, 900.0));
        assert_eq!(viewer.last_size, egui::vec2(1000.0, 900.0));
        assert_eq!(viewer.positions.len(), viewer.users.len());

        let region = Region::lower_band(1000.0, 900.0, NAVBAR_HEIGHT, MARKER_EXTENT).unwrap();
        for p in viewer.positions.iter() {
            assert!(region.contains(p.as_vec2()));
        }
    }

    #[test]
    fn marker_hit_test_finds_the_marker_under_the_cursor() {
        let mut viewer = FocusMapViewer::new();
        let rect = test_rect();

        viewer.positions = PositionSet {
            points: vec![Position::new(100.0, 600.0), Position::new(400.0, 800.0)],
        };

        // Inside the first marker's square (offset by the rect origin).
        let hit = viewer.marker_at(egui::pos2(140.0, 680.0), rect);
        assert_eq!(hit, Some(0));

        // Inside the second marker's square.
        let hit = viewer.marker_at(egui::pos2(470.0, 900.0), rect);
        assert_eq!(hit, Some(1));

        // Empty map area.
        let hit = viewer.marker_at(egui::pos2(10.0, 100.0), rect);
        assert_eq!(hit, None);
    }

    #[test]
    fn add_wanderer_extends_roster_and_keeps_separation() {
        let mut viewer = FocusMapViewer::new();
        viewer.rescatter(egui::vec2(1200.0, 1600.0));

        let before = viewer.users.len();
        viewer.add_wanderer();

        assert!(viewer.scatter_error.is_none());
        assert_eq!(viewer.users.len(), before + 1);
        assert_eq!(viewer.positions.len(), before + 1);
        assert!(viewer.positions.min_separation().unwrap() >= viewer.cfg.min_distance);
        assert_eq!(viewer.users.last().unwrap().name, "Wanderer 1");
    }

    #[test]
    fn tiny_window_reports_the_error_instead_of_hanging() {
        let mut viewer = FocusMapViewer::new();

        viewer.rescatter(egui::vec2(100.0, 100.0));

        assert!(viewer.positions.is_empty());
        assert!(matches!(
            viewer.scatter_error,
            Some(ScatterError::EmptyRegion { .. })
        ));
    }
}
