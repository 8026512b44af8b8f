//! Payout selection over pending mission payments.
//!
//! The selection is an explicit value owned by the caller; a
//! [`PendingPayouts`] snapshot bundles it with the records it refers to.

use std::collections::BTreeSet;

use tracing::debug;

use super::commission::{resolve_commission, Commission};
use super::models::{PayoutRequest, PendingPayment};

/// Sum of the amounts of records whose id is selected.
pub fn selected_amount(records: &[PendingPayment], selection: &PayoutSelection) -> i64 {
    records
        .iter()
        .filter(|record| selection.contains(&record.id))
        .fold(0i64, |acc, record| acc.saturating_add(record.amount))
}

/// Set of selected mission ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayoutSelection {
    ids: BTreeSet<String>,
}

impl PayoutSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &BTreeSet<String> {
        &self.ids
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Add the id if absent, remove it otherwise.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// True when every record is selected (vacuously true for no records).
    pub fn is_all_selected(&self, records: &[PendingPayment]) -> bool {
        records.iter().all(|record| self.ids.contains(&record.id))
    }

    /// Clear the selection if everything is selected, select every record otherwise.
    pub fn toggle_all(&mut self, records: &[PendingPayment]) {
        if self.is_all_selected(records) {
            self.ids.clear();
        } else {
            self.ids = records.iter().map(|record| record.id.clone()).collect();
        }
    }
}

impl FromIterator<String> for PayoutSelection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Aggregate and commission for the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutPreview {
    pub selected_amount: i64,
    pub selected_count: usize,
    pub commission: Commission,
}

/// Pending payments as last fetched, plus the announcer's selection
#[derive(Debug, Clone, Default)]
pub struct PendingPayouts {
    records: Vec<PendingPayment>,
    selection: PayoutSelection,
}

impl PendingPayouts {
    pub fn new(records: Vec<PendingPayment>) -> Self {
        Self {
            records,
            selection: PayoutSelection::new(),
        }
    }

    pub fn records(&self) -> &[PendingPayment] {
        &self.records
    }

    pub fn selection(&self) -> &PayoutSelection {
        &self.selection
    }

    /// Replace the snapshot with freshly fetched records; the selection resets.
    pub fn refresh(&mut self, records: Vec<PendingPayment>) {
        debug!(
            "Pending payouts refreshed: {} -> {} records, selection cleared",
            self.records.len(),
            records.len()
        );
        self.records = records;
        self.selection.clear();
    }

    pub fn toggle(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    pub fn toggle_all(&mut self) {
        self.selection.toggle_all(&self.records);
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(&self.records)
    }

    pub fn selected_amount(&self) -> i64 {
        selected_amount(&self.records, &self.selection)
    }

    /// Selected records that exist in the snapshot
    fn selected_records(&self) -> impl Iterator<Item = &PendingPayment> {
        self.records
            .iter()
            .filter(|record| self.selection.contains(&record.id))
    }

    pub fn preview(&self) -> PayoutPreview {
        let amount = self.selected_amount();
        PayoutPreview {
            selected_amount: amount,
            selected_count: self.selected_records().count(),
            commission: resolve_commission(amount),
        }
    }

    /// Build the payout request for the selection.
    ///
    /// Returns `None` when the selected amount is not positive.
    pub fn build_request(&self) -> Option<PayoutRequest> {
        let preview = self.preview();
        if preview.selected_amount <= 0 {
            return None;
        }

        Some(PayoutRequest {
            amount: preview.selected_amount,
            selected_mission_ids: self
                .selected_records()
                .map(|record| record.id.clone())
                .collect(),
            commission_rate: preview.commission.rate,
            commission_fee: preview.commission.fee,
            net_amount: preview.commission.net,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<PendingPayment> {
        vec![
            PendingPayment::new("m1", 4_000),
            PendingPayment::new("m2", 6_000),
            PendingPayment::new("m3", 12_500),
        ]
    }

    #[test]
    fn test_empty_selection_is_zero() {
        assert_eq!(selected_amount(&records(), &PayoutSelection::new()), 0);
        assert_eq!(selected_amount(&[], &PayoutSelection::new()), 0);
    }

    #[test]
    fn test_selected_amount_sums_selected_only() {
        let selection: PayoutSelection = ["m1", "m3"].iter().map(|s| s.to_string()).collect();
        assert_eq!(selected_amount(&records(), &selection), 16_500);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let selection: PayoutSelection = ["m2", "gone"].iter().map(|s| s.to_string()).collect();
        assert_eq!(selected_amount(&records(), &selection), 6_000);
    }

    #[test]
    fn test_toggle_single_id() {
        let mut selection = PayoutSelection::new();
        selection.toggle("m1");
        assert!(selection.contains("m1"));
        selection.toggle("m1");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_from_partial_selects_everything() {
        let records = records();
        let mut selection = PayoutSelection::new();
        selection.toggle("m2");

        selection.toggle_all(&records);
        assert!(selection.is_all_selected(&records));
        assert_eq!(selection.len(), 3);

        // Second toggle clears, it does not restore the partial selection
        selection.toggle_all(&records);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_twice_from_all_selected_round_trips() {
        let records = records();
        let mut selection = PayoutSelection::new();
        selection.toggle_all(&records);
        let start = selection.clone();

        selection.toggle_all(&records);
        assert!(selection.is_empty());
        selection.toggle_all(&records);
        assert_eq!(selection, start);
    }

    #[test]
    fn test_toggle_all_on_empty_list() {
        let mut selection = PayoutSelection::new();
        assert!(selection.is_all_selected(&[]));
        selection.toggle_all(&[]);
        assert!(selection.is_empty());
        selection.toggle_all(&[]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_refresh_resets_selection() {
        let mut payouts = PendingPayouts::new(records());
        payouts.toggle_all();
        assert!(payouts.is_all_selected());

        payouts.refresh(vec![PendingPayment::new("m4", 1_000)]);
        assert!(payouts.selection().is_empty());
        assert_eq!(payouts.records().len(), 1);
        assert_eq!(payouts.selected_amount(), 0);
    }

    #[test]
    fn test_preview_feeds_commission() {
        let mut payouts = PendingPayouts::new(records());
        payouts.toggle("m1");
        payouts.toggle("m2");

        let preview = payouts.preview();
        // 100.00 EUR -> 15%
        assert_eq!(preview.selected_amount, 10_000);
        assert_eq!(preview.selected_count, 2);
        assert_eq!(preview.commission.rate, 15);
        assert_eq!(preview.commission.fee, 1_500);
        assert_eq!(preview.commission.net, 8_500);

        payouts.toggle("m3");
        // 225.00 EUR -> 10%
        let preview = payouts.preview();
        assert_eq!(preview.commission.rate, 10);
        assert_eq!(preview.commission.fee, 2_250);
    }

    #[test]
    fn test_build_request() {
        let mut payouts = PendingPayouts::new(records());
        assert!(payouts.build_request().is_none());

        payouts.toggle("m3");
        payouts.toggle("stale");
        let request = payouts.build_request().unwrap();
        assert_eq!(request.amount, 12_500);
        assert_eq!(request.selected_mission_ids.len(), 1);
        assert!(request.selected_mission_ids.contains("m3"));
        assert_eq!(request.commission_rate, 15);
        assert_eq!(request.commission_fee + request.net_amount, request.amount);
    }

    #[test]
    fn test_build_request_rejects_zero_amount() {
        let mut payouts = PendingPayouts::new(vec![PendingPayment::new("free", 0)]);
        payouts.toggle_all();
        assert!(payouts.build_request().is_none());
    }
}
