use se_trainer::QuizApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 760.0])
            .with_min_inner_size([480.0, 540.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Entrenador de defensa contra ingeniería social",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}
