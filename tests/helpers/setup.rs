use chrono::NaiveDate;
use enterprise_planner_api::{Application, ChannelTicker};
use enterprise_planner_infra::{PlannerContext, StaticTimeSys};
use enterprise_planner_sdk::PlannerSDK;
use futures::channel::mpsc::UnboundedSender;
use std::sync::Arc;

pub struct TestApp {
    pub today: NaiveDate,
    /// Triggers a scheduled compliance sweep
    pub sweep_ticks: UnboundedSender<()>,
}

pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, PlannerSDK) {
    let today = test_today();
    let mut ctx = PlannerContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.sys = Arc::new(StaticTimeSys::at_date(today));

    let (sweep_ticks, ticker) = ChannelTicker::channel();
    let application = Application::with_ticker(ctx, ticker)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { today, sweep_ticks };
    (app, PlannerSDK::new(address))
}
