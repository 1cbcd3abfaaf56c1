//! Daily background sweep of inactive accounts.
use crate::application::{commands::users::UserCommandService, ports::time::Clock};
use chrono::{DateTime, Duration, NaiveTime, Utc};
use std::{fmt, str::FromStr, sync::Arc};
use thiserror::Error;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{Instrument, info_span};

pub const DEFAULT_SWEEP_CRON: &str = "0 30 23 * * *";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("expected six fields `sec min hour * * *`, got {0}")]
    FieldCount(usize),
    #[error("invalid {field} value `{value}`")]
    Field { field: &'static str, value: String },
    #[error("only daily schedules are supported; `{0}` must be `*`")]
    NotDaily(String),
}

/// A cron expression restricted to one fixed time of day (UTC):
/// `sec min hour * * *`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    at: NaiveTime,
}

impl DailySchedule {
    pub fn at(&self) -> NaiveTime {
        self.at
    }

    /// First fire time strictly after `now`.
    pub fn next_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.date_naive().and_time(self.at).and_utc();
        if today > now {
            today
        } else {
            today + Duration::days(1)
        }
    }
}

fn parse_field(field: &'static str, value: &str, max: u32) -> Result<u32, ScheduleError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|v| *v <= max)
        .ok_or_else(|| ScheduleError::Field {
            field,
            value: value.to_string(),
        })
}

impl FromStr for DailySchedule {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let &[sec, min, hour, day, month, weekday] = fields.as_slice() else {
            return Err(ScheduleError::FieldCount(fields.len()));
        };

        for rest in [day, month, weekday] {
            if rest != "*" && rest != "?" {
                return Err(ScheduleError::NotDaily(rest.to_string()));
            }
        }

        let second = parse_field("second", sec, 59)?;
        let minute = parse_field("minute", min, 59)?;
        let hour = parse_field("hour", hour, 23)?;

        NaiveTime::from_hms_opt(hour, minute, second)
            .map(|at| Self { at })
            .ok_or_else(|| ScheduleError::Field {
                field: "time",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for DailySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use chrono::Timelike;
        write!(
            f,
            "{} {} {} * * *",
            self.at.second(),
            self.at.minute(),
            self.at.hour()
        )
    }
}

/// Handle to the running sweep task.
pub struct SweepHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweepHandle {
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        if let Err(err) = self.task.await {
            tracing::warn!(error = %err, "inactive user sweep task ended abnormally");
        }
    }
}

/// Spawns the daily sweep on the current runtime.
pub fn spawn_inactive_user_sweep(
    user_commands: Arc<UserCommandService>,
    schedule: DailySchedule,
    clock: Arc<dyn Clock>,
) -> SweepHandle {
    let (shutdown, mut shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(
        async move {
            tracing::info!(%schedule, "inactive user sweep scheduled");
            loop {
                let now = clock.now();
                let next = schedule.next_after(now);
                let wait = (next - now).to_std().unwrap_or_default();
                tracing::debug!(%next, "next inactive user sweep");

                tokio::select! {
                    () = tokio::time::sleep(wait) => {
                        match user_commands.delete_inactive_users().await {
                            Ok(removed) => tracing::info!(removed, "inactive user sweep finished"),
                            Err(err) => tracing::error!(error = %err, "inactive user sweep failed"),
                        }
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            tracing::info!("inactive user sweep shutting down");
                            break;
                        }
                    }
                }
            }
        }
        .instrument(info_span!("inactive_user_sweep")),
    );

    SweepHandle { shutdown, task }
}
