//! Perpetual dual-stream supervision loop.
//!
//! Drains comments to their drained-marker, then submissions, processing
//! each item synchronously through decide -> execute. Stream-level failures
//! escalate to backoff/reconnect; per-item failures stay with their item.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use tradewarden_core::{decide, ContentItem, EngineCfg, RetryState};

use crate::executor::{execute_decision, ExecutorCfg, MessageCatalog};
use crate::ports::{
    ContentSource, ContentStream, NotificationChannel, Sleeper, UpstreamError, UpstreamResult,
    VerificationStore,
};

/// Loop phase, exposed for logging and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Backoff,
    Reconnecting,
}

#[derive(Clone, Debug)]
pub struct SupervisorCfg {
    /// One backoff unit; an upstream server failure pauses for
    /// `base_backoff * failed_attempts`.
    pub base_backoff: Duration,
    /// Consecutive per-item failures before one operator alert is sent.
    pub max_consecutive_item_failures: u32,
    /// Per-call budget hint for collaborator transports. The blocking loop
    /// cannot preempt a call already in flight.
    pub item_timeout: Duration,
}

impl Default for SupervisorCfg {
    fn default() -> Self {
        Self {
            base_backoff: Duration::from_secs(120),
            max_consecutive_item_failures: 5,
            item_timeout: Duration::from_secs(30),
        }
    }
}

/// Drives both content streams forever.
///
/// Single logical worker: items are processed strictly in arrival order, so
/// an author's badge mutations apply in the order their content arrived.
pub struct StreamSupervisor<S, V, N, M, P>
where
    S: ContentSource,
{
    source: S,
    store: V,
    notifier: N,
    messages: M,
    sleeper: P,
    engine_cfg: EngineCfg,
    exec_cfg: ExecutorCfg,
    cfg: SupervisorCfg,
    retry: RetryState,
    phase: Phase,
    consecutive_item_failures: u32,
    streams: Option<(S::Stream, S::Stream)>,
}

impl<S, V, N, M, P> StreamSupervisor<S, V, N, M, P>
where
    S: ContentSource,
    V: VerificationStore,
    N: NotificationChannel,
    M: MessageCatalog,
    P: Sleeper,
{
    pub fn new(source: S, store: V, notifier: N, messages: M, sleeper: P) -> Self {
        Self {
            source,
            store,
            notifier,
            messages,
            sleeper,
            engine_cfg: EngineCfg::default(),
            exec_cfg: ExecutorCfg::default(),
            cfg: SupervisorCfg::default(),
            retry: RetryState::default(),
            phase: Phase::Running,
            consecutive_item_failures: 0,
            streams: None,
        }
    }

    pub fn set_engine_cfg(&mut self, cfg: EngineCfg) {
        self.engine_cfg = cfg;
    }

    pub fn set_executor_cfg(&mut self, cfg: ExecutorCfg) {
        self.exec_cfg = cfg;
    }

    pub fn set_cfg(&mut self, cfg: SupervisorCfg) {
        self.cfg = cfg;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn retry(&self) -> RetryState {
        self.retry
    }

    /// Run until the process is killed. There is no terminal state.
    pub fn run(&mut self) -> ! {
        info!("supervisor live");
        loop {
            self.cycle();
        }
    }

    /// One full supervision iteration: drain both streams, or fail over
    /// into backoff + reconnect.
    pub fn cycle(&mut self) {
        match self.drain_pass() {
            Ok(()) => {
                if self.retry.failed_attempts > 1 {
                    info!("clean drain cycle; backoff counter reset");
                }
                self.retry.note_success();
            }
            Err(err) => {
                self.enter_backoff(&err);
                self.reconnect();
            }
        }
    }

    /// Comments first, then submissions, mirroring arrival-order
    /// expectations. Failed streams are discarded; reconnect rebuilds them.
    fn drain_pass(&mut self) -> UpstreamResult<()> {
        let (mut comments, mut submissions) = match self.streams.take() {
            Some(pair) => pair,
            None => (self.source.comments()?, self.source.submissions()?),
        };
        self.phase = Phase::Running;

        let result = self
            .drain_one(&mut comments)
            .and_then(|()| self.drain_one(&mut submissions));

        if result.is_ok() {
            self.streams = Some((comments, submissions));
        }
        result
    }

    fn drain_one(&mut self, stream: &mut S::Stream) -> UpstreamResult<()> {
        while let Some(item) = stream.next()? {
            self.process_item(&item);
        }
        Ok(())
    }

    /// Per-item failures never tear the loop down: log, count, alert once
    /// past the threshold, move on. No per-item retry.
    fn process_item(&mut self, item: &ContentItem) {
        match self.moderate(item) {
            Ok(()) => {
                self.consecutive_item_failures = 0;
            }
            Err(err) => {
                warn!(item = %item.id, author = %item.author, %err, "item abandoned");
                self.consecutive_item_failures += 1;
                if self.consecutive_item_failures == self.cfg.max_consecutive_item_failures {
                    let alert = format!(
                        "{} consecutive item failures, latest on {}: {err}",
                        self.consecutive_item_failures, item.permalink
                    );
                    if self.notifier.send(&alert).is_err() {
                        warn!("operator alert delivery failed");
                    }
                }
            }
        }
    }

    fn moderate(&self, item: &ContentItem) -> UpstreamResult<()> {
        let record = self.store.lookup(&item.author.to_ascii_lowercase())?;
        let decision = decide(item, record.as_ref(), &self.engine_cfg);
        debug!(item = %item.id, author = %item.author, ?decision, "decided");
        execute_decision(
            &self.source,
            &self.store,
            &self.notifier,
            &self.messages,
            &self.exec_cfg,
            item,
            record.as_ref(),
            &decision,
        )
    }

    /// Report the failure, then pause only for upstream server errors:
    /// `base_backoff * failed_attempts`, incrementing the counter after the
    /// pause. Other classes reconnect immediately.
    fn enter_backoff(&mut self, err: &UpstreamError) {
        self.phase = Phase::Backoff;
        error!(%err, attempts = self.retry.failed_attempts, "stream drain failed");

        if self.notifier.send(&format!("stream failure: {err}")).is_err() {
            warn!("operator alert delivery failed");
        }

        if err.is_server_side() {
            let pause = self.cfg.base_backoff * self.retry.failed_attempts;
            info!(?pause, "upstream server error; backing off");
            self.sleeper.sleep(pause);
            self.retry.note_failure();
        }
    }

    /// Re-establish both streams with skip-history semantics. On failure the
    /// next cycle retries from scratch.
    fn reconnect(&mut self) {
        self.phase = Phase::Reconnecting;
        let pair = self
            .source
            .comments()
            .and_then(|comments| Ok((comments, self.source.submissions()?)));
        match pair {
            Ok(pair) => {
                self.streams = Some(pair);
                self.phase = Phase::Running;
                debug!("streams re-established");
            }
            Err(err) => {
                warn!(%err, "stream re-establishment failed");
            }
        }
    }
}
