use std::sync::mpsc::{self, Receiver, Sender};

use flight_sim::Flight;
use storyteller::{StoryClient, StoryError};
use threadpool::ThreadPool;

/// Story panel state for the selected flight.
#[derive(Debug, Clone, PartialEq)]
pub enum StoryState {
    Loading,
    Ready(String),
    Failed(String),
}

struct StoryOutcome {
    generation: u64,
    result: Result<String, StoryError>,
}

/// Runs story requests on a background worker and hands results back to the
/// UI thread.
///
/// Every request bumps a generation counter that travels with the job, so a
/// response for a flight the user has already navigated away from is
/// discarded instead of displayed.
pub struct StoryFetcher {
    pool: ThreadPool,
    tx: Sender<StoryOutcome>,
    rx: Receiver<StoryOutcome>,
    generation: u64,
}

impl StoryFetcher {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            pool: ThreadPool::new(1),
            tx,
            rx,
            generation: 0,
        }
    }

    /// Requests a story for `flight`, superseding any in-flight request.
    pub fn request(&mut self, flight: Flight) {
        self.generation += 1;
        let generation = self.generation;
        let tx = self.tx.clone();

        self.pool.execute(move || {
            let result =
                StoryClient::from_env().and_then(|client| client.generate_story(&flight));
            // The receiver only drops on app teardown.
            tx.send(StoryOutcome { generation, result }).ok();
        });
    }

    /// Returns the result of the most recent request, if it has arrived.
    /// Results from superseded requests are dropped.
    pub fn poll(&mut self) -> Option<Result<String, StoryError>> {
        while let Ok(outcome) = self.rx.try_recv() {
            if outcome.generation == self.generation {
                return Some(outcome.result);
            }
        }
        None
    }
}

impl Default for StoryFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_is_empty_without_requests() {
        let mut fetcher = StoryFetcher::new();
        assert!(fetcher.poll().is_none());
    }

    #[test]
    fn test_stale_generations_are_discarded() {
        let mut fetcher = StoryFetcher::new();
        fetcher.generation = 2;

        fetcher
            .tx
            .send(StoryOutcome {
                generation: 1,
                result: Ok("stale story".to_string()),
            })
            .unwrap();
        assert!(fetcher.poll().is_none());

        fetcher
            .tx
            .send(StoryOutcome {
                generation: 2,
                result: Ok("current story".to_string()),
            })
            .unwrap();
        let result = fetcher.poll().expect("current generation should surface");
        assert_eq!(result.unwrap(), "current story");
    }

    #[test]
    fn test_stale_result_does_not_mask_current_one() {
        let mut fetcher = StoryFetcher::new();
        fetcher.generation = 3;

        for generation in [1, 2, 3] {
            fetcher
                .tx
                .send(StoryOutcome {
                    generation,
                    result: Ok(format!("story {}", generation)),
                })
                .unwrap();
        }

        let result = fetcher.poll().expect("should reach generation 3");
        assert_eq!(result.unwrap(), "story 3");
    }
}
