use crate::libtango::jisho::Dataset;
use crate::libtango::mistakes::MistakeLog;
use crate::libtango::session::{Phase, Session, Submission};
use crate::Error;
use eframe::egui;
use eframe::egui::Align;
use eframe::egui::Color32;
use eframe::egui::Layout;
use eframe::egui::RichText;
use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};
use log::debug;
use rand::rngs::StdRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Practice,
    Mistakes,
}

struct GuiState {
    dataset: Dataset,
    rng: StdRng,

    page: Page,
    session: Session,
    mistakes: MistakeLog,
    selected: Option<String>,
    feedback: Option<Submission>,
}

impl GuiState {
    fn new(dataset: Dataset, rng: StdRng) -> Self {
        Self {
            dataset,
            rng,
            page: Page::Home,
            session: Session::default(),
            mistakes: MistakeLog::default(),
            selected: None,
            feedback: None,
        }
    }

    fn start_practice(&mut self, words: Vec<String>) {
        // words are filtered through the dictionary, so start cannot fail
        self.session = Session::start(&words, &self.dataset.jisho, &mut self.rng).unwrap();
        self.selected = None;
        self.feedback = None;
        self.page = Page::Practice;
    }

    fn draw_home(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new("単語練習しよう！").size(32.0));
            ui.label("TOEFL / GRE Vocab Trainer");
            ui.label(format!("{} words loaded", self.dataset.jisho.len()));
            ui.add_space(16.0);
            if ui.button(RichText::new("Practice").size(20.0)).clicked() {
                let words: Vec<String> =
                    self.dataset.jisho.words().map(str::to_string).collect();
                self.start_practice(words);
            }
            ui.add_space(8.0);
            if ui.button(RichText::new("Mistakes").size(20.0)).clicked() {
                self.page = Page::Mistakes;
            }
        });
    }

    fn draw_practice(&mut self, ui: &mut Ui) {
        let Some(question) = self.session.current().cloned() else {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No words available.").size(20.0));
                ui.add_space(8.0);
                if ui.button("Home").clicked() {
                    self.page = Page::Home;
                }
            });
            return;
        };

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!(
                    "Question {} of {}",
                    self.session.position(),
                    self.session.total()
                ))
                .strong(),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(format!("Score: {}", self.session.score()));
            });
        });
        ui.separator();

        ui.label(RichText::new(&question.word).size(40.0));
        ui.add_space(12.0);

        let answered = self.session.current_answer().map(str::to_string);
        for option in &question.options {
            let checked = match (&answered, &self.selected) {
                (Some(answer), _) => answer == option,
                (None, Some(selected)) => selected == option,
                _ => false,
            };
            if ui.radio(checked, option.as_str()).clicked() && answered.is_none() {
                self.selected = Some(option.clone());
            }
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Submit").clicked() {
                if let Some(selected) = self.selected.clone() {
                    let verdict = self.session.submit(&selected, &mut self.mistakes);
                    debug!("[Gui] submitted {:?}: {:?}", selected, verdict);
                    self.feedback = Some(verdict);
                }
            }
            if ui.button("⬅ Previous").clicked() {
                self.session.go_previous();
                self.selected = None;
                self.feedback = None;
            }
            if ui.button("Next ➡").clicked() {
                self.session
                    .go_next(&self.dataset.jisho, &mut self.rng)
                    .unwrap();
                self.selected = None;
                self.feedback = None;
            }
            if ui.button("Home").clicked() {
                self.page = Page::Home;
            }
        });

        if let Some(feedback) = &self.feedback {
            ui.add_space(8.0);
            match feedback {
                Submission::Correct => {
                    ui.colored_label(Color32::from_rgb(0x2e, 0xcc, 0x71), "Correct!");
                }
                Submission::Incorrect { correct } => {
                    ui.colored_label(
                        Color32::from_rgb(0xe7, 0x4c, 0x3c),
                        format!("Incorrect! The correct meaning was {:?}.", correct),
                    );
                }
                Submission::Rejected => {
                    ui.colored_label(Color32::GRAY, "This question is already settled.");
                }
            }
        }

        if self.session.phase() == Phase::SetComplete {
            ui.add_space(8.0);
            ui.label(
                RichText::new("You completed this set!")
                    .size(20.0)
                    .color(Color32::from_rgb(0x2e, 0xcc, 0x71)),
            );
        }
    }

    fn draw_mistakes(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Mistake Review").size(28.0));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if !self.mistakes.is_empty() && ui.button("Practice Mistakes").clicked() {
                let words = self.mistakes.words();
                self.start_practice(words);
            }
            if ui.button("Home").clicked() {
                self.page = Page::Home;
            }
        });
        ui.separator();

        if self.mistakes.is_empty() {
            ui.label("No mistakes yet!");
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(120.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Word");
                });
                header.col(|ui| {
                    ui.strong("Wrong");
                });
            })
            .body(|mut body| {
                for (word, count) in self.mistakes.iter() {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(word);
                        });
                        row.col(|ui| {
                            ui.label(format!("{} time(s)", count));
                        });
                    });
                }
            });
    }
}

impl eframe::App for GuiState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Home => self.draw_home(ui),
            Page::Practice => self.draw_practice(ui),
            Page::Mistakes => self.draw_mistakes(ui),
        });
    }
}

pub fn run(dataset: Dataset, rng: StdRng) -> Result<(), Error> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 420.0])
            .with_min_inner_size([360.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "単語練習しよう!",
        native_options,
        Box::new(|_cc| Ok(Box::new(GuiState::new(dataset, rng)))),
    )?;

    Ok(())
}
