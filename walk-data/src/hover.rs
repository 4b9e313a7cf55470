//! Tooltip hover state for the scatter plot.
//!
//! Leaving a mark does not hide the tooltip straight away: it issues a
//! [`HideTicket`] that the caller redeems after the hide delay. Entering any
//! mark in the meantime revokes the ticket, so moving the pointer between
//! neighbouring marks never flashes the tooltip off and back on, and a late
//! hide can never clear a newer target.

use walk_survey::observation::Observation;

/// Tooltip position in plot pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipAnchor {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoverTarget {
    pub observation: Observation,
    pub anchor: TooltipAnchor,
}

/// Tooltip text, read verbatim from the hovered observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    pub flow: String,
    pub time: String,
    pub day_and_date: String,
    pub temperature: String,
}

impl HoverTarget {
    pub fn tooltip_content(&self) -> TooltipContent {
        let o = &self.observation;
        TooltipContent {
            flow: format!("PPH: {}", o.pph),
            time: o.time_label(),
            day_and_date: format!("{}, {}", o.day_of_week, o.date_label()),
            temperature: format!("Apparent temp: {}ºC", o.temperature_apparent),
        }
    }
}

/// A scheduled hide. Only the most recently issued ticket can hide the
/// tooltip, and only if no mark was entered since it was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    target: Option<HoverTarget>,
    pending_hide: Option<HideTicket>,
    issued: u64,
}

impl HoverState {
    pub fn target(&self) -> Option<&HoverTarget> {
        self.target.as_ref()
    }

    pub fn has_pending_hide(&self) -> bool {
        self.pending_hide.is_some()
    }

    /// Pointer entered a mark: revoke any pending hide and show this
    /// observation.
    pub fn enter(&mut self, observation: Observation, anchor: TooltipAnchor) {
        self.pending_hide = None;
        self.target = Some(HoverTarget {
            observation,
            anchor,
        });
    }

    /// Pointer left a mark: issue a ticket to redeem with [`expire`](Self::expire)
    /// once the hide delay has passed. Replaces any earlier ticket.
    pub fn leave(&mut self) -> HideTicket {
        self.issued += 1;
        let ticket = HideTicket(self.issued);
        self.pending_hide = Some(ticket);
        ticket
    }

    /// The hide delay for `ticket` elapsed. Returns whether the tooltip was
    /// hidden; stale or revoked tickets are ignored.
    pub fn expire(&mut self, ticket: HideTicket) -> bool {
        if self.pending_hide != Some(ticket) {
            return false;
        }
        self.pending_hide = None;
        self.target = None;
        true
    }
}
