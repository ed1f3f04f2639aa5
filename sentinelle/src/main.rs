use sentinelle::app::App;
use sentinelle::ui;
use sentinelle::ui::theme::Theme;
use sentinelle::ui::widgets::notifications::NotificationManager;
use sentinelle::utils::runtime::TOKIO_RT;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sentinelle=info")),
        )
        .init();

    // Enter the tokio runtime so UI handlers can `tokio::spawn`.
    let _runtime_guard = TOKIO_RT.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SENTINELLE")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SENTINELLE",
        options,
        Box::new(|cc| {
            Theme::apply(&cc.egui_ctx);
            Ok(Box::new(SentinelleGui::new()))
        }),
    )
}

/// eframe shell around the application orchestrator.
struct SentinelleGui {
    app: App,
    toasts: NotificationManager,
}

impl SentinelleGui {
    fn new() -> Self {
        SentinelleGui {
            app: App::new(),
            toasts: NotificationManager::new(),
        }
    }
}

impl eframe::App for SentinelleGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        self.app.on_frame(dt);

        ui::render(ctx, &mut self.app, &mut self.toasts);
        self.toasts.show(ctx);

        let (needs_repaint, animating) = {
            let mut state = self.app.state.write();
            let needs = std::mem::take(&mut state.needs_repaint);
            (needs, state.wheel.wheel.is_animating())
        };

        if animating || needs_repaint {
            ctx.request_repaint();
        } else {
            // Idle cadence: keep polling the event channel without burning CPU.
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
