use eframe::egui::{self, Align, Align2, Color32, Layout, RichText, TextEdit, Widget};
use eframe::{Frame, Storage};
use egui_extras::{Column, TableBuilder};

use config::Config;
use error::AccountError;
use teller::Teller;

mod account;
mod config;
mod error;
mod store;
mod teller;

const BANNER: Color32 = Color32::from_rgb(33, 150, 243);

#[derive(Copy, Clone, Debug, PartialEq)]
enum Trigger {
    Create,
    Deposit,
    Withdraw,
    View,
}

impl Trigger {
    const ALL: [Trigger; 4] = [
        Trigger::Create,
        Trigger::Deposit,
        Trigger::Withdraw,
        Trigger::View,
    ];

    fn label(self) -> &'static str {
        match self {
            Trigger::Create => "Create Account",
            Trigger::Deposit => "Deposit",
            Trigger::Withdraw => "Withdraw",
            Trigger::View => "View Details",
        }
    }
}

pub struct App {
    cfg: Config,
    teller: Teller,
    warn: Result<(), AccountError>,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("banner")
            .frame(egui::Frame::none().fill(BANNER).inner_margin(15.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let title = RichText::new("Banking Management System")
                        .size(22.0)
                        .strong()
                        .color(Color32::WHITE);
                    ui.label(title);
                });
            });

        egui::TopBottomPanel::bottom("bottom").show(ctx, |ui| {
            ui.horizontal(|ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.separator();
                ui.label("Currency:");
                TextEdit::singleline(&mut self.cfg.currency)
                    .desired_width(30.0)
                    .ui(ui);
                ui.checkbox(&mut self.cfg.allow_negative_amounts, "Allow negative amounts");
                ui.separator();
                ui.weak(format!("Data file: {}", self.cfg.data_file.display()));
            });
        });

        egui::SidePanel::right("output")
            .min_width(280.0)
            .show(ctx, |ui| {
                ui.heading("Transaction Output");
                ui.separator();

                let row_height = egui::TextStyle::Monospace.resolve(ui.style()).size * 1.6;
                let log = &self.teller.log;

                TableBuilder::new(ui)
                    .striped(true)
                    .stick_to_bottom(true)
                    .cell_layout(Layout::left_to_right(Align::Center))
                    .column(Column::auto())
                    .column(Column::remainder())
                    .body(|body| {
                        body.rows(row_height, log.len(), |mut row| {
                            if let Some(entry) = log.get(row.index()) {
                                row.col(|ui| {
                                    ui.weak(format!(
                                        "{:02}:{:02}:{:02}",
                                        entry.at.hour(),
                                        entry.at.minute(),
                                        entry.at.second()
                                    ));
                                });
                                row.col(|ui| {
                                    ui.monospace(entry.text.as_str());
                                });
                            }
                        });
                    });
            });

        let mut fired = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            // the error notification blocks the form until dismissed
            ui.add_enabled_ui(self.warn.is_ok(), |ui| {
                ui.heading("Account Details");
                ui.separator();

                egui::Grid::new("account_form")
                    .num_columns(2)
                    .spacing([10.0, 10.0])
                    .show(ui, |ui| {
                        ui.label("Account Number:");
                        ui.text_edit_singleline(&mut self.teller.account.number);
                        ui.end_row();

                        ui.label("Account Holder Name:");
                        ui.text_edit_singleline(&mut self.teller.account.holder);
                        ui.end_row();

                        ui.label("Amount:");
                        ui.text_edit_singleline(&mut self.teller.amount);
                        ui.end_row();
                    });

                ui.add_space(20.0);
                ui.horizontal(|ui| {
                    for trigger in Trigger::ALL {
                        if ui.button(trigger.label()).clicked() {
                            fired = Some(trigger);
                        }
                    }
                });
            });
        });

        if let Some(trigger) = fired {
            self.fire(trigger);
        }

        if let Err(e) = &self.warn {
            let mut dismissed = false;
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(RichText::new(e.to_string()).color(Color32::RED));
                    if let Some(hint) = e.hint() {
                        ui.weak(hint);
                    }
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            if dismissed {
                self.warn = Ok(());
            }
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.cfg);
    }
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let cfg = cc
            .storage
            .and_then(|storage| eframe::get_value::<Config>(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self::with_config(cfg)
    }

    fn with_config(cfg: Config) -> Self {
        let teller = Teller::open(&cfg);
        Self {
            cfg,
            teller,
            warn: Ok(()),
        }
    }

    fn fire(&mut self, trigger: Trigger) {
        let result = match trigger {
            Trigger::Create => self.teller.create(&self.cfg),
            Trigger::Deposit => self.teller.deposit(&self.cfg),
            Trigger::Withdraw => self.teller.withdraw(&self.cfg),
            Trigger::View => self.teller.view(&self.cfg),
        };
        if let Err(e) = &result {
            log::warn!("{} failed: {e}", trigger.label());
        }
        self.warn = result;
    }
}
