//! Hero carousel preview on a live timer.

use std::time::Duration;

use anyhow::{bail, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use harvey_commerce::carousel::{Carousel, CarouselSlide};
use harvey_observability::StructuredLogger;

use super::CarouselArgs;
use crate::context::Context;

/// Recurring timer task. Aborted when dropped.
pub struct Ticker {
    handle: JoinHandle<()>,
    ticks: mpsc::Receiver<()>,
}

impl Ticker {
    /// Start firing every `period`, first firing one period from now.
    pub fn start(period: Duration) -> Self {
        let (tx, ticks) = mpsc::channel(1);
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        Self { handle, ticks }
    }

    /// Wait for the next firing.
    pub async fn tick(&mut self) -> Option<()> {
        self.ticks.recv().await
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Run the carousel command.
pub async fn run(args: CarouselArgs, ctx: &Context) -> Result<()> {
    let period = args
        .interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| ctx.config.carousel_interval());
    if period.is_zero() {
        bail!("Carousel interval must be greater than zero");
    }

    let logger = ctx.logger("carousel");
    let mut carousel = Carousel::default();
    carousel.go_to(args.start)?;
    if !ctx.config.carousel.autoplay {
        carousel.controller_mut().pointer_enter();
    }

    ctx.output.header("Hero Carousel");
    ctx.output.debug(&format!("Interval {} ms", period.as_millis()));
    show(&carousel, ctx);

    if !carousel.controller().is_auto_playing() {
        ctx.output.info("Auto-play is disabled in the config.");
        return Ok(());
    }

    let timer_logger = logger.child("timer");
    let mut ticker = Some(start_timer(period, &timer_logger));
    let mut advances = 0;
    let mut interrupted = false;

    while advances < args.ticks {
        let Some(timer) = ticker.as_mut() else {
            break;
        };

        tokio::select! {
            fired = timer.tick() => {
                if fired.is_none() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                ctx.output.warn("Interrupted");
                interrupted = true;
                break;
            }
        }

        if carousel.tick() {
            advances += 1;
            show(&carousel, ctx);
        }

        if args.pause_after == Some(advances) && advances < args.ticks {
            carousel.controller_mut().pointer_enter();
            drop(ticker.take());
            timer_logger.debug("Timer stopped");
            ctx.output.info(&format!("Paused for {} ms", args.pause_for_ms));

            tokio::time::sleep(Duration::from_millis(args.pause_for_ms)).await;

            carousel.controller_mut().pointer_leave();
            ticker = Some(start_timer(period, &timer_logger));
            ctx.output.info("Resumed");
        }
    }

    drop(ticker);
    logger
        .info_builder("Preview finished")
        .field_i64("advances", advances as i64)
        .field_bool("interrupted", interrupted)
        .emit();

    Ok(())
}

fn start_timer(period: Duration, logger: &StructuredLogger) -> Ticker {
    logger
        .debug_builder("Timer started")
        .duration_ms("interval_ms", period)
        .emit();
    Ticker::start(period)
}

fn show(carousel: &Carousel, ctx: &Context) {
    let Some(slide) = carousel.current_slide() else {
        return;
    };
    let index = carousel.controller().current();
    let count = carousel.controller().slide_count();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "index": index,
            "slide": slide,
        }));
        return;
    }

    ctx.output.line("");
    ctx.output.line(&format!("{}  {}", dots(index, count), describe(slide)));
    ctx.output.line(&format!("   {}", slide.description));
    ctx.output.line(&format!("   [{}]  {}", slide.cta_label, slide.image));
}

fn describe(slide: &CarouselSlide) -> String {
    format!(
        "{} / {}",
        console::style(&slide.subtitle).magenta(),
        console::style(&slide.title).bold()
    )
}

fn dots(index: usize, count: usize) -> String {
    (0..count)
        .map(|i| if i == index { '●' } else { '○' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dots() {
        assert_eq!(dots(1, 4), "○●○○");
        assert_eq!(dots(0, 0), "");
    }

    #[tokio::test]
    async fn test_ticker_fires_repeatedly() {
        let mut ticker = Ticker::start(Duration::from_millis(5));
        assert_eq!(ticker.tick().await, Some(()));
        assert_eq!(ticker.tick().await, Some(()));
    }

    #[tokio::test]
    async fn test_dropping_ticker_stops_task() {
        let ticker = Ticker::start(Duration::from_millis(5));
        let handle = ticker.handle.abort_handle();
        drop(ticker);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(handle.is_finished());
    }
}
