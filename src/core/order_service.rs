use crate::adapters::clock::SystemClock;
use crate::core::{
    Clock, CustomerId, Kit, KitEntry, KitId, KitSource, Order, OrderId, OrderRequest,
    OrderService, Result,
};
use crate::domain::model::{MAX_QUANTITY, MIN_QUANTITY};
use crate::domain::pricing;
use crate::utils::error::ValidationError;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

/// Owns the kit catalog and the append-only order book.
///
/// The service is single-caller: every operation takes `&self` or `&mut self`
/// and runs to completion. Share it across threads by wrapping it in a mutex.
pub struct OrderCatalogService<C: Clock> {
    clock: C,
    kits: BTreeMap<KitId, Kit>,
    orders: Vec<Order>,
}

impl OrderCatalogService<SystemClock> {
    pub fn with_system_clock() -> Self {
        Self::new(SystemClock)
    }
}

impl Default for OrderCatalogService<SystemClock> {
    fn default() -> Self {
        Self::with_system_clock()
    }
}

impl<C: Clock> OrderCatalogService<C> {
    /// Starts with a catalog holding only [`Kit::default_kit`] and no orders.
    pub fn new(clock: C) -> Self {
        let default_kit = Kit::default_kit();
        Self {
            clock,
            kits: BTreeMap::from([(default_kit.id, default_kit)]),
            orders: Vec::new(),
        }
    }

    pub fn place_order(
        &mut self,
        request: OrderRequest,
    ) -> std::result::Result<Order, ValidationError> {
        let base_price = self.validate_order(&request).inspect_err(|e| {
            tracing::warn!("Rejected order for customer {}: {}", request.customer_id, e);
        })?;

        let order = Order {
            id: self.next_order_id(),
            customer_id: request.customer_id,
            expected_delivery_date: request.expected_delivery_date,
            kit_id: request.kit_id,
            quantity: request.quantity,
            total_price: pricing::total_price(base_price, request.quantity),
        };

        tracing::debug!(
            "Placed order {} for customer {}: {} x kit {} = {}",
            order.id,
            order.customer_id,
            order.quantity,
            order.kit_id,
            order.total_price
        );

        self.orders.push(order.clone());
        Ok(order)
    }

    /// Checks run in a fixed order: delivery date, kit, quantity. Returns the
    /// base price of the referenced kit.
    fn validate_order(&self, request: &OrderRequest) -> std::result::Result<Decimal, ValidationError> {
        let now = self.clock.now();
        if request.expected_delivery_date <= now {
            return Err(ValidationError::InvalidDeliveryDate {
                requested: request.expected_delivery_date,
                now,
            });
        }

        let kit = self
            .kits
            .get(&request.kit_id)
            .ok_or(ValidationError::UnknownKit {
                kit_id: request.kit_id,
            })?;

        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&request.quantity) {
            return Err(ValidationError::QuantityOutOfRange {
                quantity: request.quantity,
            });
        }

        Ok(kit.base_price)
    }

    fn next_order_id(&self) -> OrderId {
        self.orders
            .iter()
            .map(|order| order.id)
            .max()
            .map_or(1, |max_id| max_id + 1)
    }

    /// Adds a batch of kits to the catalog; existing kits are kept.
    ///
    /// The import is all-or-nothing. Every entry is validated, in order,
    /// against the catalog and against the entries before it in the same
    /// batch; the catalog is only modified when the whole batch passes.
    pub fn import_kits<I>(&mut self, entries: I) -> std::result::Result<usize, ValidationError>
    where
        I: IntoIterator<Item = KitEntry>,
    {
        let batch: Vec<KitEntry> = entries.into_iter().collect();
        self.validate_batch(&batch).inspect_err(|e| {
            tracing::warn!("Rejected kit import of {} entries: {}", batch.len(), e);
        })?;

        let imported = batch.len();
        self.kits
            .extend(batch.into_iter().map(|entry| (entry.kit_id, Kit::from(entry))));

        tracing::info!(
            "Imported {} kits, catalog now holds {}",
            imported,
            self.kits.len()
        );
        Ok(imported)
    }

    fn validate_batch(&self, batch: &[KitEntry]) -> std::result::Result<(), ValidationError> {
        if batch.is_empty() {
            return Err(ValidationError::EmptyImportBatch);
        }

        let mut batch_ids = HashSet::with_capacity(batch.len());
        for entry in batch {
            if self.kits.contains_key(&entry.kit_id) || !batch_ids.insert(entry.kit_id) {
                return Err(ValidationError::DuplicateKitId {
                    kit_id: entry.kit_id,
                });
            }
            if !pricing::is_orderable_price(entry.base_price) {
                return Err(ValidationError::InvalidBasePrice {
                    kit_id: entry.kit_id,
                    base_price: entry.base_price,
                });
            }
        }

        Ok(())
    }

    /// Loads entries from `source` and imports them as one batch.
    pub fn import_from<S: KitSource>(&mut self, source: &S) -> Result<usize> {
        let entries = source.load_kits()?;
        tracing::debug!("Loaded {} catalog entries from source", entries.len());
        Ok(self.import_kits(entries)?)
    }

    /// Empties the catalog. Orders already placed are unaffected.
    pub fn clear_kits(&mut self) {
        tracing::info!("Clearing {} kits from catalog", self.kits.len());
        self.kits.clear();
    }

    pub fn get_customer_orders(&self, customer_id: CustomerId) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|order| order.customer_id == customer_id)
            .cloned()
            .collect()
    }

    pub fn kit(&self, kit_id: KitId) -> Option<&Kit> {
        self.kits.get(&kit_id)
    }

    /// Catalog contents, ordered by kit id.
    pub fn kits(&self) -> impl Iterator<Item = &Kit> {
        self.kits.values()
    }

    /// Every order in placement order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

impl<C: Clock> OrderService for OrderCatalogService<C> {
    fn place_order(&mut self, request: OrderRequest) -> std::result::Result<Order, ValidationError> {
        OrderCatalogService::place_order(self, request)
    }

    fn get_customer_orders(&self, customer_id: CustomerId) -> Vec<Order> {
        OrderCatalogService::get_customer_orders(self, customer_id)
    }
}
