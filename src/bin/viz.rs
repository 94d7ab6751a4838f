use eframe::egui::{self, Color32, Pos2, Stroke, Vec2};
use egui_plot::{Line, Plot, PlotPoints};

use fd_trainer::config::SimConfig;
use fd_trainer::dynamics::{Control, ControlSet};
use fd_trainer::sim::{FrameClock, Report, Session, SessionEvent, Snapshot};

const SKY: Color32 = Color32::from_rgb(0x05, 0x96, 0xff);
const GROUND: Color32 = Color32::from_rgb(0xa2, 0x56, 0x25);
const CUE: Color32 = Color32::from_rgb(0x00, 0xff, 0x00);
const BUG: Color32 = Color32::from_rgb(0xff, 0x00, 0xff);
const PX_PER_DEG_PITCH: f32 = 5.0;

const KEYMAP: [(egui::Key, Control); 6] = [
    (egui::Key::ArrowLeft, Control::RollLeft),
    (egui::Key::ArrowRight, Control::RollRight),
    (egui::Key::ArrowUp, Control::PitchUp),
    (egui::Key::ArrowDown, Control::PitchDown),
    (egui::Key::S, Control::SpeedUp),
    (egui::Key::X, Control::SpeedDown),
];

fn main() -> eframe::Result {
    env_logger::init();

    let app = match std::env::var("FD_TRAINER_CONFIG") {
        Ok(path) => match SimConfig::from_json_file(&path) {
            Ok(config) => TrainerApp::new(config),
            Err(e) => {
                log::error!("cannot load config {}: {:#}", path, e);
                TrainerApp::with_config_error(format!("Cannot load config {}: {:#}", path, e))
            }
        },
        Err(_) => TrainerApp::new(SimConfig::default()),
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native("Flight Director Trainer", options, Box::new(|_| Ok(Box::new(app))))
}

struct TrainerApp {
    /// `None` when the config file failed to load; `error` then says why.
    config: Option<SimConfig>,
    session: Option<Session>,
    clock: FrameClock,
    accuracy: Vec<[f64; 2]>,
    report: Option<Report>,
    error: Option<String>,
}

impl TrainerApp {
    fn new(config: SimConfig) -> Self {
        let clock = FrameClock::new(config.max_dt);
        Self { config: Some(config), session: None, clock, accuracy: Vec::new(), report: None, error: None }
    }

    fn with_config_error(error: String) -> Self {
        let clock = FrameClock::new(SimConfig::default().max_dt);
        Self { config: None, session: None, clock, accuracy: Vec::new(), report: None, error: Some(error) }
    }

    fn start(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.restart();
        } else {
            let Some(config) = self.config.clone() else {
                return;
            };
            match Session::start(config) {
                Ok(session) => self.session = Some(session),
                Err(e) => {
                    self.error = Some(e.to_string());
                    return;
                }
            }
        }
        self.clock.reset();
        self.accuracy.clear();
        self.report = None;
    }

    fn poll_controls(ctx: &egui::Context) -> ControlSet {
        ctx.input(|i| {
            KEYMAP
                .iter()
                .filter(|(key, _)| i.key_down(*key))
                .map(|&(_, control)| control)
                .collect()
        })
    }

    fn step(&mut self, ctx: &egui::Context) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.is_running() {
            return;
        }
        let controls = Self::poll_controls(ctx);
        let dt = self.clock.tick();
        if let Some(SessionEvent::Ended(report)) = session.tick(&controls, dt) {
            self.report = Some(report);
        }
        let snap = session.snapshot();
        if snap.is_running() {
            self.accuracy.push([snap.elapsed, snap.average_accuracy]);
        }
        ctx.request_repaint();
    }
}

impl eframe::App for TrainerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.step(ctx);
        let snapshot = self.session.as_ref().map(Session::snapshot);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Flight Director Trainer");
                if let Some(s) = &snapshot {
                    ui.separator();
                    ui.monospace(format!(
                        "TIME {}   SCORE {}   ACCURACY {:.0}%   CAPTURES {}",
                        s.clock(),
                        s.score,
                        s.average_accuracy,
                        s.captures
                    ));
                }
            });
        });

        egui::SidePanel::right("tapes").min_width(260.0).show(ctx, |ui| {
            if let Some(s) = &snapshot {
                tape_readouts(ui, s);
            }
            ui.separator();
            ui.label("Arrows: roll / pitch    S / X: speed up / down");
            ui.separator();
            ui.label("Average accuracy (%)");
            let points: PlotPoints = self.accuracy.iter().copied().collect();
            Plot::new("accuracy")
                .height(220.0)
                .include_y(0.0)
                .include_y(100.0)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Accuracy", points));
                });
        });

        egui::CentralPanel::default().show(ctx, |ui| match &snapshot {
            Some(s) => attitude_indicator(ui, s),
            None => {
                ui.vertical_centered(|ui| {
                    ui.add_space(200.0);
                    ui.heading("Null the green flight director bars.");
                    if let Some(e) = &self.error {
                        ui.colored_label(Color32::RED, e);
                    }
                    if self.config.is_some() && ui.button("Start").clicked() {
                        self.start();
                    }
                });
            }
        });

        if let Some(report) = self.report.clone() {
            egui::Window::new("Session complete")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.monospace(format!("Final score:  {}", report.score));
                    ui.monospace(format!("Accuracy:     {:.0}%", report.accuracy));
                    ui.monospace(format!("Captures:     {}", report.captures));
                    ui.heading(format!("Rating: {}", report.rating));
                    if ui.button("Restart").clicked() {
                        self.start();
                    }
                });
        }
    }
}

fn tape_readouts(ui: &mut egui::Ui, s: &Snapshot) {
    let d = &s.display;
    egui::Grid::new("readouts").num_columns(3).show(ui, |ui| {
        ui.label("");
        ui.label("current");
        ui.colored_label(BUG, "selected");
        ui.end_row();

        ui.label("Speed (kt)");
        ui.monospace(format!("{:.0}", d.speed));
        ui.colored_label(BUG, format!("{:.0}", s.targets.speed));
        ui.end_row();

        ui.label("Altitude (ft)");
        ui.monospace(format!("{:.0}", d.altitude));
        ui.colored_label(BUG, format!("{:.0}", s.targets.altitude));
        ui.end_row();

        ui.label("Heading (deg)");
        ui.monospace(format!("{:03.0}", d.heading));
        ui.colored_label(BUG, format!("{:03.0}", s.targets.heading));
        ui.end_row();

        ui.label("Hold (s)");
        ui.monospace(format!("{:.1}", s.stabilized));
        ui.label("");
        ui.end_row();
    });
}

/// Square attitude display: rolled/pitched horizon plus the FD cross bars.
fn attitude_indicator(ui: &mut egui::Ui, s: &Snapshot) {
    let side = ui.available_width().min(ui.available_height()).max(100.0);
    let (response, painter) = ui.allocate_painter(Vec2::splat(side), egui::Sense::hover());
    let rect = response.rect;
    let painter = painter.with_clip_rect(rect);
    let c = rect.center();
    let d = &s.display;

    // Horizon: rotate by -roll, shift by pitch (negative pitch = nose up = ground moves down)
    let (sin, cos) = (-(d.roll as f32)).to_radians().sin_cos();
    let rotate = |x: f32, y: f32| Pos2::new(c.x + x * cos - y * sin, c.y + x * sin + y * cos);
    let offset = -(d.pitch as f32) * PX_PER_DEG_PITCH;
    let far = side * 2.0;

    painter.rect_filled(rect, 0.0, SKY);
    let ground = vec![
        rotate(-far, offset),
        rotate(far, offset),
        rotate(far, offset + far),
        rotate(-far, offset + far),
    ];
    painter.add(egui::Shape::convex_polygon(ground, GROUND, Stroke::NONE));
    painter.line_segment([rotate(-far, offset), rotate(far, offset)], Stroke::new(3.0, Color32::WHITE));

    for p in [-30, -20, -10, 10, 20, 30] {
        let y = offset - p as f32 * PX_PER_DEG_PITCH;
        let stroke = Stroke::new(2.0, Color32::WHITE);
        painter.line_segment([rotate(-50.0, y), rotate(-15.0, y)], stroke);
        painter.line_segment([rotate(15.0, y), rotate(50.0, y)], stroke);
    }

    // Fixed aircraft symbol
    let yellow = Stroke::new(4.0, Color32::YELLOW);
    painter.line_segment([c + Vec2::new(-70.0, 0.0), c + Vec2::new(-20.0, 0.0)], yellow);
    painter.line_segment([c + Vec2::new(20.0, 0.0), c + Vec2::new(70.0, 0.0)], yellow);

    // FD bars: vertical bar moves with x, horizontal bar with y
    let scale = side / 400.0;
    let fd = Vec2::new(d.fd.x as f32, d.fd.y as f32) * scale;
    let bar = Stroke::new(4.0, CUE);
    let half = side * 0.3;
    painter.line_segment([Pos2::new(c.x - half, c.y + fd.y), Pos2::new(c.x + half, c.y + fd.y)], bar);
    painter.line_segment([Pos2::new(c.x + fd.x, c.y - half), Pos2::new(c.x + fd.x, c.y + half)], bar);

    painter.text(
        rect.left_top() + Vec2::new(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        format!("BANK {:+.0}  PITCH {:+.0}", d.roll, -d.pitch),
        egui::FontId::monospace(14.0),
        Color32::WHITE,
    );
}
