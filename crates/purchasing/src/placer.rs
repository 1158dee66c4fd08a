use restock_inventory::{RegionalReorderDirective, ReorderDirective};
use tracing::info;

/// Side-effecting collaborator that turns a directive into an actual order.
///
/// Injected by the caller after a successful evaluation; implementations may
/// hit a supplier API, enqueue a purchase order, or just log.
pub trait OrderPlacer {
    fn place_order(&self, product: &str, quantity: i64, warehouse: &str);
}

/// Placer that records the placement as a structured log event and nothing
/// else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingOrderPlacer;

impl OrderPlacer for LoggingOrderPlacer {
    fn place_order(&self, product: &str, quantity: i64, warehouse: &str) {
        info!(product, quantity, warehouse, "order placed");
    }
}

/// Invoke the placer once per directive, preserving directive order.
pub fn dispatch(placer: &dyn OrderPlacer, directives: &[ReorderDirective]) {
    for directive in directives {
        placer.place_order(&directive.product, directive.quantity, &directive.warehouse);
    }
}

/// Regional-variant counterpart of [`dispatch`].
pub fn dispatch_regional(placer: &dyn OrderPlacer, directives: &[RegionalReorderDirective]) {
    for directive in directives {
        placer.place_order(&directive.product, directive.quantity, &directive.warehouse);
    }
}
