use crate::config::BotConfig;
use crate::status_log::StatusLog;
use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use kupi::{extract_offers, format_message, HttpClient, Offer};
use log::{error, info};
use twitter::{Client, Credentials};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct Scheduler {
    config: BotConfig,
    page: HttpClient,
    twitter: Client,
    status_log: StatusLog,
}

impl Scheduler {
    pub fn new(config: BotConfig, credentials: Credentials) -> Self {
        Self {
            status_log: StatusLog::new(config.log_path.clone()),
            page: HttpClient::new(),
            twitter: Client::new(credentials),
            config,
        }
    }

    /// Runs the daily cycle forever: wait for the fire time, post once,
    /// reschedule for the next day. Only an external signal stops it.
    pub async fn run(self) {
        loop {
            let target = next_fire_time(now_local(), self.config.fire_time);
            info!("Next tweet scheduled for {}", target.format(TIMESTAMP_FORMAT));
            self.wait_and_fire(target).await;
        }
    }

    async fn wait_and_fire(&self, target: NaiveDateTime) {
        loop {
            self.report_status(target);
            tokio::time::sleep(self.config.status_interval).await;

            if now_local() >= target {
                self.run_pipeline().await;
                break;
            }
        }
    }

    /// One fetch-extract-format-post pass. Nothing in here is allowed
    /// to take the process down; a cycle gets exactly one attempt.
    async fn run_pipeline(&self) {
        let offers = self.check_offers().await;
        let message = format_message(offers.as_deref());

        match self.twitter.create_tweet(&message).await {
            Ok(tweet) => info!("Tweet sent with id {}", tweet.id),
            Err(e) => error!("Failed to send tweet: {e}"),
        }
    }

    /// Fetch and parse failures degrade to the absent signal so the
    /// daily post still goes out as "no offers".
    async fn check_offers(&self) -> Option<Vec<Offer>> {
        match self.page.fetch_structured_data().await {
            Ok(data) => extract_offers(data.as_ref()),
            Err(e) => {
                error!("Failed to fetch or parse the promotion page: {e}");
                None
            }
        }
    }

    fn report_status(&self, target: NaiveDateTime) {
        let now = now_local();
        let status = format!(
            "Still running: {}\nTime until next tweet: {}",
            now.format(TIMESTAMP_FORMAT),
            format_countdown(target - now),
        );

        info!("{status}");
        if let Err(e) = self.status_log.append(&status) {
            error!("Failed to write the status log: {e}");
        }
    }
}

/// Next daily fire instant: today at `fire_time`, or tomorrow at the
/// same time once today's instant has already passed. Never rolls more
/// than one day.
fn next_fire_time(now: NaiveDateTime, fire_time: NaiveTime) -> NaiveDateTime {
    let target = now.date().and_time(fire_time);
    if now > target {
        target + Duration::days(1)
    } else {
        target
    }
}

fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

fn format_countdown(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = total % 3600 / 60;
    let seconds = total % 60;

    format!("{hours} hours {minutes} minutes {seconds} seconds")
}
