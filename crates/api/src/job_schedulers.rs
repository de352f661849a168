use crate::{
    compliance::{RunComplianceSweepUseCase, SweepTrigger},
    shared::usecase::execute,
};
use actix_web::rt::{
    task::JoinHandle,
    time::{interval_at, sleep_until, Instant, Interval},
};
use enterprise_planner_infra::PlannerContext;
use futures::{channel::mpsc, StreamExt};
use std::time::Duration;

/// Decides when the next scheduled compliance sweep runs
#[async_trait::async_trait(?Send)]
pub trait SweepTicker {
    /// Resolves when the next sweep is due. Returns `false` once the
    /// ticker is exhausted.
    async fn tick(&mut self) -> bool;
}

/// Ticks once after `startup_delay` and then every `period`, counted from
/// the moment the ticker was created.
pub struct IntervalTicker {
    startup_at: Option<Instant>,
    interval: Interval,
}

impl IntervalTicker {
    /// Must be called from within the actix runtime
    pub fn new(startup_delay: Duration, period: Duration) -> Self {
        let now = Instant::now();
        let period = std::cmp::max(period, Duration::from_secs(1));
        Self {
            startup_at: Some(now + startup_delay),
            interval: interval_at(now + period, period),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl SweepTicker for IntervalTicker {
    async fn tick(&mut self) -> bool {
        match self.startup_at.take() {
            Some(startup_at) => sleep_until(startup_at).await,
            None => {
                self.interval.tick().await;
            }
        }
        true
    }
}

/// Ticks whenever a message is sent on the paired sender
pub struct ChannelTicker {
    ticks: mpsc::UnboundedReceiver<()>,
}

impl ChannelTicker {
    pub fn channel() -> (mpsc::UnboundedSender<()>, Self) {
        let (sender, ticks) = mpsc::unbounded();
        (sender, Self { ticks })
    }
}

#[async_trait::async_trait(?Send)]
impl SweepTicker for ChannelTicker {
    async fn tick(&mut self) -> bool {
        self.ticks.next().await.is_some()
    }
}

/// Spawns a compliance sweep on every tick. Sweeps are not awaited before
/// the next tick, so a slow sweep may overlap with the following one.
pub fn start_compliance_sweep_job<T>(ctx: PlannerContext, mut ticker: T) -> JoinHandle<()>
where
    T: SweepTicker + 'static,
{
    actix_web::rt::spawn(async move {
        while ticker.tick().await {
            let context = ctx.clone();
            actix_web::rt::spawn(async move {
                let usecase = RunComplianceSweepUseCase {
                    trigger: SweepTrigger::JobScheduler,
                };
                let _ = execute(usecase, &context).await;
            });
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::rt::time::{sleep, timeout};
    use chrono::{NaiveDate, Utc};
    use enterprise_planner_domain::{date::add_days, Vehicle};
    use enterprise_planner_infra::StaticTimeSys;
    use std::sync::Arc;

    #[actix_web::test]
    async fn interval_ticker_ticks_after_startup_delay_and_then_periodically() {
        let started = Instant::now();
        let mut ticker = IntervalTicker::new(Duration::from_millis(10), Duration::from_secs(1));

        assert!(ticker.tick().await);
        assert!(started.elapsed() >= Duration::from_millis(10));
        assert!(started.elapsed() < Duration::from_secs(1));

        assert!(timeout(Duration::from_secs(3), ticker.tick()).await.unwrap());
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[actix_web::test]
    async fn channel_ticker_stops_when_sender_is_dropped() {
        let (sender, mut ticker) = ChannelTicker::channel();
        sender.unbounded_send(()).unwrap();
        assert!(ticker.tick().await);
        drop(sender);
        assert!(!ticker.tick().await);
    }

    #[actix_web::test]
    async fn runs_a_sweep_per_tick() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let mut ctx = PlannerContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys::at_date(today));
        let mut vehicle = Vehicle::new("HH-AB 123".into(), "PKW".into(), Utc::now());
        vehicle.tuv_date = Some(add_days(today, -1));
        ctx.repos.vehicles.insert(&vehicle).await.unwrap();

        let (sender, ticker) = ChannelTicker::channel();
        let job = start_compliance_sweep_job(ctx.clone(), ticker);
        sender.unbounded_send(()).unwrap();
        sender.unbounded_send(()).unwrap();
        drop(sender);
        job.await.unwrap();

        // Sweeps run detached from the job
        sleep(Duration::from_millis(100)).await;
        let tasks = ctx.repos.tasks.find_all().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "TÜV HH-AB 123: abgelaufen");
    }
}
