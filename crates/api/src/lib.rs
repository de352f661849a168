mod certificate;
mod compliance;
mod contract;
mod employee;
mod error;
mod job_schedulers;
mod maintenance;
mod shared;
mod status;
mod task;
mod vehicle;

use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use enterprise_planner_infra::PlannerContext;
use job_schedulers::{start_compliance_sweep_job, IntervalTicker};
use std::{net::TcpListener, time::Duration};
use tracing_actix_web::TracingLogger;

pub use error::PlannerError;
pub use job_schedulers::{ChannelTicker, SweepTicker};

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    // Before the employee routes so that `/employees/compliance` is not taken for an id
    compliance::configure_routes(cfg);
    certificate::configure_routes(cfg);
    contract::configure_routes(cfg);
    employee::configure_routes(cfg);
    maintenance::configure_routes(cfg);
    status::configure_routes(cfg);
    task::configure_routes(cfg);
    vehicle::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    /// Binds the server and starts the scheduled compliance sweeps
    pub async fn new(context: PlannerContext) -> Result<Self, std::io::Error> {
        let ticker = IntervalTicker::new(
            Duration::from_secs(context.config.compliance_sweep_startup_delay_secs),
            Duration::from_secs(context.config.compliance_sweep_interval_secs),
        );
        Self::with_ticker(context, ticker).await
    }

    /// Like `new`, but the sweeps are scheduled by the given ticker
    pub async fn with_ticker<T>(context: PlannerContext, ticker: T) -> Result<Self, std::io::Error>
    where
        T: SweepTicker + 'static,
    {
        let (server, port) = Application::configure_server(context.clone()).await?;
        start_compliance_sweep_job(context, ticker);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(context: PlannerContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
