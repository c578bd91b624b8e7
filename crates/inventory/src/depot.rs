//! Intake/dispatch pipeline.
//!
//! A [`Depot`] owns the ledger and the alert log and runs the two batch
//! operations against them:
//!
//! - **bulk receive**: append every valid pair to the ledger
//! - **bulk dispatch**: extract each pair FIFO, run the threshold monitor,
//!   backorder misses, then pack whatever was extracted
//!
//! Invalid pairs (non-positive quantity, blank kind) are dropped silently.
//! Backorders and an over-limit batch are reported as notices and never
//! surface as errors; only allocation failure does.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainResult, StockKey};

use crate::alerts::AlertLog;
use crate::assembler::{OrderAssembler, ParcelReport};
use crate::config::DepotConfig;
use crate::error::InventoryResult;
use crate::ledger::Ledger;
use crate::monitor::ThresholdMonitor;
use crate::notice::{Notice, NoticeSink};
use crate::unit::StockUnit;

/// Result of one bulk dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    pub parcel: ParcelReport,
    /// Keys requested but out of stock, in request order.
    pub backordered: Vec<StockKey>,
    /// `true` if the parcel limit stopped processing early.
    pub truncated: bool,
}

#[derive(Debug)]
pub struct Depot {
    config: DepotConfig,
    ledger: Ledger,
    alerts: AlertLog,
    monitor: ThresholdMonitor,
    assembler: OrderAssembler,
}

impl Depot {
    pub fn new(config: DepotConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ledger: Ledger::new(),
            alerts: AlertLog::new(config.alert_capacity)?,
            monitor: ThresholdMonitor::new(config.min_stock),
            assembler: OrderAssembler::new(),
        })
    }

    pub fn config(&self) -> &DepotConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn alerts(&self) -> &AlertLog {
        &self.alerts
    }

    /// Receive every valid pair. Receiving never raises alerts.
    ///
    /// Ledger storage for the whole batch is reserved before the first insert,
    /// so on `ResourceExhausted` nothing has been received. Returns the number
    /// of units added.
    pub fn bulk_receive<I>(&mut self, pairs: I, sink: &mut dyn NoticeSink) -> InventoryResult<usize>
    where
        I: IntoIterator<Item = (char, i64)>,
    {
        let keys: Vec<StockKey> = valid_keys(pairs).collect();
        self.ledger.try_reserve(keys.len())?;

        let count = keys.len();
        for key in keys {
            self.ledger.receive(key)?;
        }

        tracing::info!(received = count, stock = self.ledger.len(), "bulk receive complete");
        sink.notify(Notice::Received { count });
        Ok(count)
    }

    /// Extract each valid pair and pack the extracted units into one parcel.
    ///
    /// The parcel is assembled even when nothing was extracted (a no-op).
    /// Batch storage is reserved before the first extraction, so on
    /// `ResourceExhausted` the ledger and the alert log are untouched.
    pub fn bulk_dispatch<I>(
        &mut self,
        pairs: I,
        sink: &mut dyn NoticeSink,
    ) -> InventoryResult<DispatchOutcome>
    where
        I: IntoIterator<Item = (char, i64)>,
    {
        let limit = self.config.max_batch;
        let keys: Vec<StockKey> = valid_keys(pairs).collect();
        let mut batch = reserve_batch(keys.len().min(limit))?;
        let mut outcome = DispatchOutcome::default();

        for key in keys {
            if batch.len() >= limit {
                tracing::warn!(limit, rejected = %key, "parcel limit reached; truncating dispatch");
                sink.notify(Notice::BatchTruncated {
                    limit,
                    rejected: key,
                });
                outcome.truncated = true;
                break;
            }

            match self.ledger.extract_oldest(key) {
                Some(unit) => {
                    self.monitor
                        .check_after_extraction(&self.ledger, &mut self.alerts, key, sink);
                    batch.push(unit);
                }
                None => self.backorder(key, sink, &mut outcome),
            }
        }

        tracing::info!(
            extracted = batch.len(),
            backordered = outcome.backordered.len(),
            truncated = outcome.truncated,
            "bulk dispatch complete"
        );
        outcome.parcel = self.assembler.assemble(batch, sink);
        Ok(outcome)
    }

    /// A miss is alert-worthy regardless of the threshold policy.
    fn backorder(&mut self, key: StockKey, sink: &mut dyn NoticeSink, outcome: &mut DispatchOutcome) {
        tracing::warn!(key = %key, "out of stock; backordering");
        sink.notify(Notice::Backorder { key });
        self.alerts.record(key, sink);
        outcome.backordered.push(key);
    }
}

/// Empty batch with room for `capacity` units; pushes up to that never allocate.
fn reserve_batch(capacity: usize) -> InventoryResult<Vec<StockUnit>> {
    let mut batch = Vec::new();
    batch.try_reserve_exact(capacity)?;
    Ok(batch)
}

fn valid_keys<I>(pairs: I) -> impl Iterator<Item = StockKey>
where
    I: IntoIterator<Item = (char, i64)>,
{
    pairs
        .into_iter()
        .filter_map(|(kind, quantity)| match StockKey::new(kind, quantity) {
            Ok(key) => Some(key),
            Err(err) => {
                tracing::debug!(%kind, quantity, %err, "dropping invalid pair");
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;

    fn key(kind: char, quantity: i64) -> StockKey {
        StockKey::new(kind, quantity).unwrap()
    }

    fn demo_depot() -> Depot {
        let mut depot = Depot::new(DepotConfig::default()).unwrap();
        depot
            .bulk_receive(
                [('A', 1), ('B', 2), ('C', 10), ('A', 3)],
                &mut Vec::<Notice>::new(),
            )
            .unwrap();
        depot
    }

    #[test]
    fn batch_reservation_failure_is_reported_not_fatal() {
        let err = reserve_batch(usize::MAX).unwrap_err();
        assert!(matches!(err, InventoryError::ResourceExhausted(_)));
        assert!(reserve_batch(50).unwrap().capacity() >= 50);
    }

    #[test]
    fn dispatch_reserves_at_most_the_parcel_limit() {
        let mut depot = Depot::new(DepotConfig::default().with_max_batch(usize::MAX)).unwrap();
        depot
            .bulk_receive([('A', 1), ('B', 2)], &mut Vec::<Notice>::new())
            .unwrap();

        let outcome = depot
            .bulk_dispatch([('A', 1), ('B', 2)], &mut Vec::<Notice>::new())
            .unwrap();

        assert_eq!(outcome.parcel.len(), 2);
        assert!(depot.ledger().is_empty());
        assert_eq!(depot.config().max_batch, usize::MAX);
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(Depot::new(DepotConfig::default().with_alert_capacity(0)).is_err());
        assert!(Depot::new(DepotConfig::default().with_max_batch(0)).is_err());
    }

    #[test]
    fn receive_drops_invalid_pairs_and_never_alerts() {
        let mut depot = Depot::new(DepotConfig::default()).unwrap();
        let mut sink: Vec<Notice> = Vec::new();

        let count = depot
            .bulk_receive([('a', 1), ('B', 0), ('C', -3), (' ', 4)], &mut sink)
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(depot.ledger().count_matching(key('A', 1)), 1);
        assert_eq!(sink, vec![Notice::Received { count: 1 }]);
        assert!(depot.alerts().is_empty());
    }

    #[test]
    fn dispatch_miss_backorders_and_alerts_without_touching_ledger() {
        let mut depot = demo_depot();
        let mut sink: Vec<Notice> = Vec::new();

        let outcome = depot.bulk_dispatch([('Z', 9)], &mut sink).unwrap();

        assert_eq!(depot.ledger().len(), 4);
        assert_eq!(outcome.backordered, vec![key('Z', 9)]);
        assert!(outcome.parcel.is_empty());
        assert_eq!(
            sink,
            vec![
                Notice::Backorder { key: key('Z', 9) },
                Notice::LowStock {
                    key: key('Z', 9),
                    text: "Z9".to_string()
                },
            ]
        );
        assert_eq!(depot.alerts().render(), vec!["Z9"]);
    }

    #[test]
    fn dispatch_above_threshold_does_not_alert() {
        let mut depot = Depot::new(DepotConfig::default()).unwrap();
        depot
            .bulk_receive([('A', 1); 3], &mut Vec::<Notice>::new())
            .unwrap();

        let mut sink: Vec<Notice> = Vec::new();
        depot.bulk_dispatch([('A', 1)], &mut sink).unwrap();

        assert!(depot.alerts().is_empty());
        assert_eq!(depot.ledger().count_matching(key('A', 1)), 2);

        depot.bulk_dispatch([('A', 1)], &mut sink).unwrap();
        assert_eq!(depot.alerts().render(), vec!["A1"]);
    }

    #[test]
    fn batch_limit_truncates_and_stops() {
        let mut depot = Depot::new(DepotConfig::default().with_max_batch(2)).unwrap();
        depot
            .bulk_receive([('A', 1), ('A', 1), ('A', 1), ('A', 1)], &mut Vec::<Notice>::new())
            .unwrap();

        let mut sink: Vec<Notice> = Vec::new();
        let outcome = depot
            .bulk_dispatch([('A', 1), ('A', 1), ('A', 1), ('Q', 1)], &mut sink)
            .unwrap();

        assert!(outcome.truncated);
        assert_eq!(outcome.parcel.len(), 2);
        assert!(outcome.backordered.is_empty());
        assert_eq!(depot.ledger().count_matching(key('A', 1)), 2);
        assert!(sink.contains(&Notice::BatchTruncated {
            limit: 2,
            rejected: key('A', 1),
        }));
    }

    #[test]
    fn empty_dispatch_is_a_no_op() {
        let mut depot = demo_depot();
        let mut sink: Vec<Notice> = Vec::new();

        let outcome = depot.bulk_dispatch(Vec::new(), &mut sink).unwrap();

        assert_eq!(outcome, DispatchOutcome::default());
        assert!(sink.is_empty());
        assert_eq!(depot.ledger().len(), 4);
    }

    #[test]
    fn independent_depots_do_not_share_state() {
        let mut first = demo_depot();
        let second = demo_depot();

        first
            .bulk_dispatch([('C', 10)], &mut Vec::<Notice>::new())
            .unwrap();

        assert_eq!(first.ledger().len(), 3);
        assert_eq!(second.ledger().len(), 4);
        assert!(second.alerts().is_empty());
    }
}
