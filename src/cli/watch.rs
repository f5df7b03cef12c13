mod observers;

use std::{pin::pin, time::Duration};

use bon::Builder;
use chrono::NaiveDateTime;
use clap::Parser;
use tokio::{
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
    sync::watch,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

use self::observers::{JsonLines, Observer, Summary, Tables};
use crate::{
    api::predistribuce::{self, Client},
    cli::{appliance::AppliancesArgs, clock::Clock, receiver::ReceiverArgs},
    core::snapshot::{Snapshot, build_snapshot},
    prelude::*,
};

#[derive(Parser)]
pub struct WatchArgs {
    #[clap(flatten)]
    receiver: ReceiverArgs,

    #[clap(long, env = "POLLING_INTERVAL", default_value = "15min")]
    polling_interval: humantime::Duration,

    /// Print every snapshot as a JSON line instead of the tables.
    #[clap(long)]
    json: bool,

    #[clap(flatten)]
    appliances: AppliancesArgs,
}

impl WatchArgs {
    pub async fn run(self) -> Result {
        let (publisher, subscriber) = watch::channel(None);

        let mut observers = vec![spawn_observer(subscriber.clone(), Summary)];
        if self.json {
            observers.push(spawn_observer(subscriber, JsonLines));
        } else {
            observers.push(spawn_observer(subscriber, Tables::new(self.appliances.appliances)));
        }

        let result = Coordinator::builder()
            .client(self.receiver.new_client()?)
            .command_id(self.receiver.command_id().to_owned())
            .clock(self.receiver.clock)
            .interval(self.polling_interval)
            .publisher(publisher)
            .build()
            .run(terminated())
            .await;

        // The publisher is gone by now, so the observers drain and stop.
        for observer in observers {
            observer.await?;
        }
        result
    }
}

/// Periodically refreshes the day's schedule and publishes the derived snapshot.
#[derive(Builder)]
struct Coordinator {
    client: Client,
    command_id: String,
    clock: Clock,

    #[builder(into)]
    interval: Duration,

    /// `None` until the first successful refresh.
    publisher: watch::Sender<Option<Snapshot>>,
}

impl Coordinator {
    #[instrument(skip_all, fields(command_id = %self.command_id, interval = ?self.interval))]
    async fn run(self, shutdown: impl Future<Output = Result>) -> Result {
        let mut interval = interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval.tick().await;

        self.refresh().await.context("failed to fetch the initial HDO schedule")?;

        let mut shutdown = pin!(shutdown);
        loop {
            tokio::select! {
                result = &mut shutdown => {
                    result?;
                    info!("shutting down…");
                    return Ok(());
                }
                _ = interval.tick() => {}
            }
            self.poll().await;
        }
    }

    /// Refresh the snapshot, keeping the last known one on failure.
    async fn poll(&self) -> bool {
        match self.refresh().await {
            Ok(()) => true,
            Err(error) => {
                let error = Error::from(error);
                warn!("failed to refresh, keeping the last known snapshot: {error:#}");
                false
            }
        }
    }

    async fn refresh(&self) -> Result<(), predistribuce::Error> {
        self.refresh_at(self.clock.now()).await
    }

    /// Fetch the day of `now` and evaluate it at the same instant.
    async fn refresh_at(&self, now: NaiveDateTime) -> Result<(), predistribuce::Error> {
        let periods = self.client.get_periods(&self.command_id, Some(now.date())).await?;
        let snapshot = build_snapshot(periods, now.time());
        debug!(current_tariff = ?snapshot.current_tariff, "refreshed");
        self.publisher.send_replace(Some(snapshot));
        Ok(())
    }
}

fn spawn_observer(
    mut subscriber: watch::Receiver<Option<Snapshot>>,
    observer: impl Observer,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while subscriber.changed().await.is_ok() {
            let Some(snapshot) = subscriber.borrow_and_update().clone() else {
                continue;
            };
            if let Err(error) = observer.on_snapshot(&snapshot) {
                warn!(observer = observer.name(), "observer failed: {error:#}");
            }
        }
        debug!(observer = observer.name(), "publisher is gone");
    })
}

async fn terminated() -> Result {
    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::select! {
        result = ctrl_c() => result?,
        _ = sigterm.recv() => {}
    }
    Ok(())
}
