//! Round-robin interleaving of any number of lazy streams.
//!
//! Each turn advances exactly one lane by one step and then moves it to
//! the back of the queue, so no lane can starve the others: a lane that
//! keeps suspending without producing values only ever costs one step
//! per round. Exhausted lanes are dropped. The merged stream ends once
//! every lane is exhausted.

use crate::core::stream::Stream;
use crate::error::Error;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, warn};

/// What the scheduler does when a lane reports a fault.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FaultPolicy {
    /// Emit the fault in place as a placeholder and keep scheduling.
    Substitute,
    /// Emit the fault and end the merged stream.
    Abort,
}

impl Default for FaultPolicy {
    fn default() -> Self {
        FaultPolicy::Substitute
    }
}

enum Lane<T> {
    Stream(Stream<T>),
    /// Draws values from `source` and schedules `branch(value)` for each.
    Spawn {
        source: Stream<T>,
        branch: Arc<dyn Fn(T) -> Stream<T>>,
    },
}

enum Turn<T> {
    Yield(T),
    Fault(Error),
    Progress,
    Done,
}

/// Fair multiplexer over lazy streams.
pub struct Scheduler<T> {
    lanes: VecDeque<Lane<T>>,
    policy: FaultPolicy,
}

impl<T: 'static> Scheduler<T> {
    pub fn new(policy: FaultPolicy) -> Self {
        Scheduler {
            lanes: VecDeque::new(),
            policy,
        }
    }

    /// Add a stream to the back of the queue.
    pub fn push(&mut self, stream: Stream<T>) {
        self.lanes.push_back(Lane::Stream(stream));
    }

    /// Add a lane that turns every value of `source` into a new lane.
    ///
    /// The new lanes are interleaved with each other and with whatever
    /// else is scheduled, rather than run one after another.
    pub fn spawn(&mut self, source: Stream<T>, branch: Arc<dyn Fn(T) -> Stream<T>>) {
        self.lanes.push_back(Lane::Spawn { source, branch });
    }

    pub fn n_lanes(&self) -> usize {
        self.lanes.len()
    }

    fn turn(&mut self) -> Turn<T> {
        loop {
            let lane = match self.lanes.pop_front() {
                Some(lane) => lane,
                None => return Turn::Done,
            };

            match lane {
                Lane::Stream(Stream::Empty) => continue,
                Lane::Stream(Stream::Pair(x, rest)) => {
                    self.push(*rest);
                    return Turn::Yield(x);
                }
                Lane::Stream(Stream::Suspension(sup)) => {
                    self.push(sup());
                    return Turn::Progress;
                }
                Lane::Stream(Stream::Fault(e, rest)) => {
                    self.push(*rest);
                    return Turn::Fault(e);
                }
                Lane::Spawn { source, branch } => match source {
                    Stream::Empty => continue,
                    Stream::Pair(x, rest) => {
                        self.push(branch(x));
                        self.spawn(*rest, branch);
                        return Turn::Progress;
                    }
                    Stream::Suspension(sup) => {
                        self.spawn(sup(), branch);
                        return Turn::Progress;
                    }
                    Stream::Fault(e, rest) => {
                        self.spawn(*rest, branch);
                        return Turn::Fault(e);
                    }
                },
            }
        }
    }

    /// Run the scheduler lazily, one turn per forced suspension.
    pub fn into_stream(mut self) -> Stream<T> {
        match self.turn() {
            Turn::Yield(x) => Stream::cons(x, Stream::suspension(move || self.into_stream())),
            Turn::Progress => Stream::suspension(move || self.into_stream()),
            Turn::Done => Stream::Empty,
            Turn::Fault(e) => match self.policy {
                FaultPolicy::Substitute => {
                    warn!(error = %e, "lane faulted, emitting placeholder");
                    Stream::Fault(e, Box::new(Stream::suspension(move || self.into_stream())))
                }
                FaultPolicy::Abort => {
                    debug!(error = %e, lanes = self.n_lanes(), "lane faulted, aborting");
                    Stream::fault(e)
                }
            },
        }
    }
}

/// Interleave `streams` round-robin with the default fault policy.
pub fn interleave<T: 'static>(streams: impl IntoIterator<Item = Stream<T>>) -> Stream<T> {
    interleave_with(FaultPolicy::default(), streams)
}

/// Interleave `streams` round-robin.
pub fn interleave_with<T: 'static>(
    policy: FaultPolicy,
    streams: impl IntoIterator<Item = Stream<T>>,
) -> Stream<T> {
    let mut scheduler = Scheduler::new(policy);
    for s in streams {
        scheduler.push(s);
    }
    scheduler.into_stream()
}
