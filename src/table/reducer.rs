//! Positional Table Reducer

use super::cell::PositionalTable;
use super::layout::{Layout, Role};
use crate::money::is_present;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Running totals produced by reducing one or more tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Totals {
    sums: BTreeMap<Role, i64>,
    /// Rows whose primary cell was present
    pub components: usize,
    /// Rows seen, present or not
    pub rows: usize,
}

impl Totals {
    /// Total for `role`; zero when nothing contributed to it
    pub fn get(&self, role: Role) -> i64 {
        self.sums.get(&role).copied().unwrap_or(0)
    }

    fn add(&mut self, role: Role, amount: i64) {
        let slot = self.sums.entry(role).or_insert(0);
        *slot = slot.saturating_add(amount);
    }

    /// Fold another set of totals into this one
    pub fn merge(&mut self, other: &Totals) {
        for (role, amount) in &other.sums {
            self.add(*role, *amount);
        }
        self.components += other.components;
        self.rows += other.rows;
    }
}

/// Reduces tables of one kind, optionally restricted to a subset of roles
#[derive(Debug, Clone)]
pub struct Reducer<'a> {
    layout: &'a Layout,
    roles: Option<Vec<Role>>,
}

impl<'a> Reducer<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self {
            layout,
            roles: None,
        }
    }

    /// Only accumulate the given roles. The gate still fires if its target is selected.
    pub fn only(mut self, roles: &[Role]) -> Self {
        self.roles = Some(roles.to_vec());
        self
    }

    fn wants(&self, role: Role) -> bool {
        self.roles.as_ref().map_or(true, |roles| roles.contains(&role))
    }

    pub fn reduce(&self, table: &PositionalTable) -> Totals {
        let layout = self.layout;
        let mut totals = Totals::default();

        for (index, row) in table.rows().iter().enumerate() {
            totals.rows += 1;
            if is_present(layout.cell(row, layout.primary)) {
                totals.components += 1;
            }

            for column in layout.columns.iter().filter(|c| self.wants(c.role)) {
                if column.index < row.len() {
                    totals.add(column.role, layout.amount(row, column.role));
                }
            }

            if let Some(gate) = layout.gate.filter(|g| self.wants(g.into)) {
                if layout.is_gate_open(row) {
                    totals.add(gate.into, layout.amount(row, gate.from));
                } else {
                    trace!(kind = %layout.kind, row = index, "gate closed, row not accepted");
                }
            }
        }

        debug!(
            kind = %layout.kind,
            rows = totals.rows,
            components = totals.components,
            "Reduced positional table"
        );
        totals
    }
}

/// Reduce every role of `layout` over `table`
pub fn reduce(table: &PositionalTable, layout: &Layout) -> Totals {
    Reducer::new(layout).reduce(table)
}
