//! Dashboard panel with stats, navigation cards, quick actions, and activity log.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{BRIEFCASE, IDENTIFICATION_CARD, USER_PLUS, USERS};

use super::app::{App, LogLevel};
use super::components::{NavCard, colors, nav_card};
use crate::router::Route;

const NAV_CARDS: [(NavCard, Route); 4] = [
    (
        NavCard { title: "Applicants", description: "Review and employ", icon: IDENTIFICATION_CARD },
        Route::Applicants,
    ),
    (
        NavCard { title: "Employees", description: "Staff records", icon: USERS },
        Route::Employees,
    ),
    (
        NavCard { title: "New Applicant", description: "Register a candidate", icon: USER_PLUS },
        Route::CreateApplicant,
    ),
    (
        NavCard { title: "New Employee", description: "Hire directly", icon: BRIEFCASE },
        Route::CreateEmployee,
    ),
];

/// Show the dashboard panel.
///
/// Returns `Some(route)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Route> {
    let mut next = None;

    ui.vertical_centered(|ui| {
        ui.add_space(30.0);

        // Header
        ui.label(RichText::new("Staffdesk").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("Applicant tracking and employee management").size(14.0).weak());

        ui.add_space(30.0);

        // Stat cards row
        ui.horizontal(|ui| {
            let available = ui.available_width();
            let start_offset = ((available - 340.0) / 2.0).max(0.0);
            ui.add_space(start_offset);

            stat_card(
                ui,
                "Applicants",
                &count_text(app.applicants.records.len(), app.applicants.is_loading),
                "Waiting for a decision",
            );
            stat_card(
                ui,
                "Employees",
                &count_text(app.employees.records.len(), app.employees.is_loading),
                "Currently employed",
            );
        });

        ui.add_space(30.0);

        // Navigation cards row
        let available = ui.available_width();
        let num_cards = NAV_CARDS.len() as f32;
        let spacing = 30.0;
        let total_spacing = spacing * (num_cards - 1.0);
        let card_width = ((available - total_spacing) / num_cards).clamp(150.0, 250.0);
        let card_size = egui::vec2(card_width, card_width * 0.75);
        let total_width = card_width * num_cards + total_spacing;

        ui.horizontal(|ui| {
            ui.add_space(((available - total_width) / 2.0).max(0.0));
            for (i, (card, route)) in NAV_CARDS.iter().enumerate() {
                if i > 0 {
                    ui.add_space(spacing);
                }
                if nav_card(ui, card, card_size).clicked() {
                    next = Some(*route);
                }
            }
        });

        ui.add_space(30.0);
    });

    // Recent Activity
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::symmetric(10, 0))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Recent Activity").strong());
            ui.add_space(10.0);

            ScrollArea::vertical().max_height(180.0).show(ui, |ui| {
                if app.log_messages.is_empty() {
                    ui.label(RichText::new("No recent activity").weak());
                } else {
                    for entry in app.log_messages.iter().rev().take(10) {
                        let color = match entry.level {
                            LogLevel::Info => colors::NEUTRAL,
                            LogLevel::Success => colors::SUCCESS,
                            LogLevel::Warning => colors::WARNING,
                            LogLevel::Error => colors::ERROR,
                        };

                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                    .small()
                                    .color(Color32::DARK_GRAY),
                            );
                            ui.label(RichText::new(&entry.message).color(color));
                        });
                    }
                }
            });
        });

    next
}

fn count_text(count: usize, is_loading: bool) -> String {
    if is_loading && count == 0 {
        "...".to_string()
    } else {
        count.to_string()
    }
}

/// Render a stat card with title, value, and subtitle.
fn stat_card(ui: &mut Ui, title: &str, value: &str, subtitle: &str) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::same(5))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(150.0);

            ui.vertical(|ui| {
                ui.label(RichText::new(title).small());
                ui.label(RichText::new(value).heading().strong());
                ui.label(RichText::new(subtitle).small().weak());
            });
        });
}
