//! Dashboard Controller
//!
//! Sync handlers: one API call each, then a write into the dashboard state.
//! Writes go to the state as it is when the call completes, so overlapping
//! completions apply in network order (last writer wins).

use crate::api::{ApiError, FoodApi};
use crate::models::{FoodPatch, FoodRecord, NewFood};
use crate::store::{ActiveModal, StateHandle};

/// Ids the API never assigns count as absent: `None` and `0`.
fn present_id(id: Option<u32>) -> Option<u32> {
    id.filter(|id| *id != 0)
}

#[derive(Debug, Clone)]
pub struct Dashboard<A, S> {
    api: A,
    state: S,
}

impl<A: FoodApi, S: StateHandle> Dashboard<A, S> {
    pub fn new(api: A, state: S) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Replace the list with everything the API has
    pub async fn load_all(&self) -> Result<(), ApiError> {
        match self.api.list().await {
            Ok(foods) => {
                log::info!("Loaded {} foods", foods.len());
                self.state.apply(|s| s.replace_all(foods));
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load foods: {}", e);
                Err(e)
            }
        }
    }

    /// Create a food (always as available) and append it
    pub async fn add(&self, input: NewFood) -> Result<(), ApiError> {
        let payload = input.into_payload();
        match self.api.create(&payload).await {
            Ok(created) if created.id.is_some() => {
                log::debug!("Created food {:?}", created.id);
                self.state.apply(|s| s.append(created));
                Ok(())
            }
            Ok(_) => {
                log::error!("Failed to add food: {}", ApiError::MissingId);
                Err(ApiError::MissingId)
            }
            Err(e) => {
                log::error!("Failed to add food: {}", e);
                Err(e)
            }
        }
    }

    /// Apply `patch` to the food being edited. No-op when nothing with an id is being edited.
    pub async fn update(&self, patch: FoodPatch) -> Result<(), ApiError> {
        let Some(editing) = self.state.snapshot(|s| s.editing_food.clone()) else {
            return Ok(());
        };
        let Some(id) = present_id(editing.id) else {
            return Ok(());
        };

        self.put(id, editing.merged_with(&patch)).await
    }

    /// Flip availability of the food with this id. Unknown ids are ignored.
    pub async fn toggle_available(&self, id: u32) -> Result<(), ApiError> {
        let Some(current) = self.state.snapshot(|s| s.find(id).cloned()) else {
            return Ok(());
        };
        let flipped = FoodRecord {
            available: !current.available,
            ..current
        };

        self.put(id, flipped).await
    }

    async fn put(&self, id: u32, food: FoodRecord) -> Result<(), ApiError> {
        match self.api.update(id, &food).await {
            Ok(updated) => {
                log::debug!("Updated food {:?}", updated.id);
                self.state.apply(|s| s.replace_matching(updated));
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to update food {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Delete the food with this id. No-op without an id (or with id 0).
    ///
    /// Failures are returned to the caller untouched and the list is left as is.
    pub async fn delete(&self, id: Option<u32>) -> Result<(), ApiError> {
        let Some(id) = present_id(id) else {
            return Ok(());
        };
        self.api.delete(id).await?;
        self.state.apply(|s| s.remove_by_id(id));
        Ok(())
    }

    pub fn toggle_modal(&self, kind: ActiveModal) {
        self.state.apply(|s| s.toggle_modal(kind));
    }

    pub fn select_for_edit(&self, food: FoodRecord) {
        self.state.apply(|s| s.select_for_edit(food));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use mockall::predicate::eq;
    use tokio::sync::oneshot;

    use super::*;
    use crate::api::{FoodApi, MockFoodApi};
    use crate::store::DashboardState;

    type TestDashboard = Dashboard<MockFoodApi, Rc<RefCell<DashboardState>>>;

    fn food(id: u32, name: &str) -> FoodRecord {
        FoodRecord {
            id: Some(id),
            name: name.to_string(),
            description: format!("{} description", name),
            image: format!("{}.png", name.to_lowercase()),
            price: 5.0,
            available: true,
        }
    }

    fn dashboard(api: MockFoodApi, foods: Vec<FoodRecord>) -> TestDashboard {
        let mut state = DashboardState::new();
        state.replace_all(foods);
        Dashboard::new(api, Rc::new(RefCell::new(state)))
    }

    fn foods_of(dashboard: &TestDashboard) -> Vec<FoodRecord> {
        dashboard.state().borrow().foods.clone()
    }

    fn http_error() -> ApiError {
        ApiError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_all_replaces_foods() {
        let mut api = MockFoodApi::new();
        api.expect_list().times(1).returning(|| {
            Ok(vec![FoodRecord {
                id: Some(1),
                name: "Rice".to_string(),
                available: true,
                ..Default::default()
            }])
        });
        let dashboard = dashboard(api, vec![]);

        dashboard.load_all().await.unwrap();

        let foods = foods_of(&dashboard);
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].id, Some(1));
        assert_eq!(foods[0].name, "Rice");
        assert!(foods[0].available);
    }

    #[tokio::test]
    async fn test_load_all_failure_leaves_foods_empty() {
        let mut api = MockFoodApi::new();
        api.expect_list().times(1).returning(|| Err(http_error()));
        let dashboard = dashboard(api, vec![]);

        assert!(dashboard.load_all().await.is_err());
        assert!(foods_of(&dashboard).is_empty());
    }

    #[tokio::test]
    async fn test_add_forces_available_and_appends() {
        let mut api = MockFoodApi::new();
        api.expect_create()
            .withf(|payload| payload.available && payload.name == "Beans")
            .times(1)
            .returning(|payload| {
                Ok(FoodRecord {
                    id: Some(2),
                    name: payload.name.clone(),
                    description: payload.description.clone(),
                    image: payload.image.clone(),
                    price: payload.price,
                    available: payload.available,
                })
            });
        let dashboard = dashboard(api, vec![food(1, "Rice")]);

        let input = NewFood {
            name: "Beans".to_string(),
            available: false,
            ..Default::default()
        };
        dashboard.add(input).await.unwrap();

        let foods = foods_of(&dashboard);
        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0], food(1, "Rice"));
        assert_eq!(foods[1].id, Some(2));
        assert_eq!(foods[1].name, "Beans");
        assert!(foods[1].available);
    }

    #[tokio::test]
    async fn test_add_failure_leaves_state() {
        let mut api = MockFoodApi::new();
        api.expect_create().times(1).returning(|_| Err(http_error()));
        let dashboard = dashboard(api, vec![food(1, "Rice")]);

        assert!(dashboard.add(NewFood::default()).await.is_err());
        assert_eq!(foods_of(&dashboard), vec![food(1, "Rice")]);
    }

    #[tokio::test]
    async fn test_add_never_inserts_record_without_id() {
        let mut api = MockFoodApi::new();
        api.expect_create()
            .times(1)
            .returning(|_| Ok(FoodRecord::default()));
        let dashboard = dashboard(api, vec![]);

        let result = dashboard.add(NewFood::default()).await;
        assert!(matches!(result, Err(ApiError::MissingId)));
        assert!(foods_of(&dashboard).is_empty());
    }

    #[tokio::test]
    async fn test_update_without_editing_food_is_noop() {
        let mut api = MockFoodApi::new();
        api.expect_update().never();
        let dashboard = dashboard(api, vec![food(1, "Rice")]);

        let patch = FoodPatch {
            price: Some(9.5),
            ..Default::default()
        };
        dashboard.update(patch).await.unwrap();

        assert_eq!(foods_of(&dashboard), vec![food(1, "Rice")]);
    }

    #[tokio::test]
    async fn test_update_editing_food_without_id_is_noop() {
        let mut api = MockFoodApi::new();
        api.expect_update().never();
        let dashboard = dashboard(api, vec![food(1, "Rice")]);
        dashboard.select_for_edit(FoodRecord {
            id: None,
            ..food(1, "Rice")
        });

        dashboard.update(FoodPatch::default()).await.unwrap();
        assert_eq!(foods_of(&dashboard), vec![food(1, "Rice")]);
    }

    #[tokio::test]
    async fn test_update_replaces_only_matching_food() {
        let mut api = MockFoodApi::new();
        api.expect_update()
            .withf(|id, merged| *id == 2 && merged.price == 9.5 && merged.name == "Beans")
            .times(1)
            .returning(|_, merged| Ok(merged.clone()));
        let dashboard = dashboard(api, vec![food(1, "Rice"), food(2, "Beans"), food(3, "Salad")]);
        dashboard.select_for_edit(food(2, "Beans"));

        let patch = FoodPatch {
            price: Some(9.5),
            ..Default::default()
        };
        dashboard.update(patch).await.unwrap();

        let foods = foods_of(&dashboard);
        assert_eq!(foods.len(), 3);
        assert_eq!(foods[0], food(1, "Rice"));
        assert_eq!(foods[1], FoodRecord { price: 9.5, ..food(2, "Beans") });
        assert_eq!(foods[2], food(3, "Salad"));
    }

    #[tokio::test]
    async fn test_update_replaces_record_matching_response_id() {
        let mut api = MockFoodApi::new();
        api.expect_update()
            .withf(|id, _| *id == 2)
            .times(1)
            .returning(|_, _| {
                Ok(FoodRecord {
                    id: Some(3),
                    price: 1.0,
                    ..Default::default()
                })
            });
        let dashboard = dashboard(api, vec![food(1, "Rice"), food(2, "Beans"), food(3, "Salad")]);
        dashboard.select_for_edit(food(2, "Beans"));

        dashboard.update(FoodPatch::default()).await.unwrap();

        let foods = foods_of(&dashboard);
        assert_eq!(foods[0], food(1, "Rice"));
        assert_eq!(foods[1], food(2, "Beans"));
        assert_eq!(
            foods[2],
            FoodRecord {
                id: Some(3),
                price: 1.0,
                ..Default::default()
            }
        );
    }

    #[tokio::test]
    async fn test_update_editing_food_with_zero_id_is_noop() {
        let mut api = MockFoodApi::new();
        api.expect_update().never();
        let dashboard = dashboard(api, vec![food(1, "Rice")]);
        dashboard.select_for_edit(food(0, "Draft"));

        dashboard.update(FoodPatch::default()).await.unwrap();
        assert_eq!(foods_of(&dashboard), vec![food(1, "Rice")]);
    }

    #[tokio::test]
    async fn test_update_failure_leaves_foods() {
        let mut api = MockFoodApi::new();
        api.expect_update().times(1).returning(|_, _| Err(http_error()));
        let dashboard = dashboard(api, vec![food(2, "Beans")]);
        dashboard.select_for_edit(food(2, "Beans"));

        let patch = FoodPatch {
            name: Some("Lentils".to_string()),
            ..Default::default()
        };
        assert!(dashboard.update(patch).await.is_err());
        assert_eq!(foods_of(&dashboard), vec![food(2, "Beans")]);
    }

    #[tokio::test]
    async fn test_toggle_available_flips_flag() {
        let mut api = MockFoodApi::new();
        api.expect_update()
            .withf(|id, sent| *id == 1 && !sent.available)
            .times(1)
            .returning(|_, sent| Ok(sent.clone()));
        let dashboard = dashboard(api, vec![food(1, "Rice"), food(2, "Beans")]);

        dashboard.toggle_available(1).await.unwrap();

        let foods = foods_of(&dashboard);
        assert!(!foods[0].available);
        assert!(foods[1].available);
    }

    #[tokio::test]
    async fn test_toggle_available_unknown_id_is_noop() {
        let mut api = MockFoodApi::new();
        api.expect_update().never();
        let dashboard = dashboard(api, vec![food(1, "Rice")]);

        dashboard.toggle_available(42).await.unwrap();
        assert_eq!(foods_of(&dashboard), vec![food(1, "Rice")]);
    }

    #[tokio::test]
    async fn test_delete_without_id_is_noop() {
        let mut api = MockFoodApi::new();
        api.expect_delete().never();
        let dashboard = dashboard(api, vec![food(1, "Rice")]);

        dashboard.delete(None).await.unwrap();
        assert_eq!(foods_of(&dashboard), vec![food(1, "Rice")]);
    }

    #[tokio::test]
    async fn test_delete_removes_food_and_is_idempotent() {
        let mut api = MockFoodApi::new();
        api.expect_delete()
            .with(eq(2))
            .times(2)
            .returning(|_| Ok(()));
        let dashboard = dashboard(api, vec![food(1, "Rice"), food(2, "Beans")]);

        dashboard.delete(Some(2)).await.unwrap();
        assert_eq!(foods_of(&dashboard), vec![food(1, "Rice")]);

        dashboard.delete(Some(2)).await.unwrap();
        assert_eq!(foods_of(&dashboard), vec![food(1, "Rice")]);
    }

    #[tokio::test]
    async fn test_delete_zero_id_is_noop() {
        let mut api = MockFoodApi::new();
        api.expect_delete().never();
        let dashboard = dashboard(api, vec![food(0, "Draft"), food(1, "Rice")]);

        dashboard.delete(Some(0)).await.unwrap();
        assert_eq!(foods_of(&dashboard).len(), 2);
    }

    #[tokio::test]
    async fn test_toggle_available_failure_keeps_stored_flag() {
        let mut api = MockFoodApi::new();
        api.expect_update().times(1).returning(|_, _| Err(http_error()));
        let dashboard = dashboard(api, vec![food(1, "Rice")]);

        assert!(dashboard.toggle_available(1).await.is_err());
        assert!(foods_of(&dashboard)[0].available);
    }

    /// Create and delete calls that stay pending until their gate is opened
    #[derive(Default)]
    struct GatedApi {
        create_gate: RefCell<Option<oneshot::Receiver<FoodRecord>>>,
        delete_gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait(?Send)]
    impl FoodApi for GatedApi {
        async fn list(&self) -> Result<Vec<FoodRecord>, ApiError> {
            Ok(vec![])
        }

        async fn create(&self, _food: &NewFood) -> Result<FoodRecord, ApiError> {
            let gate = self.create_gate.borrow_mut().take().expect("create gate");
            Ok(gate.await.expect("create response"))
        }

        async fn update(&self, _id: u32, food: &FoodRecord) -> Result<FoodRecord, ApiError> {
            Ok(food.clone())
        }

        async fn delete(&self, _id: u32) -> Result<(), ApiError> {
            let gate = self.delete_gate.borrow_mut().take().expect("delete gate");
            gate.await.expect("delete response");
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_overlapping_add_and_delete_both_apply() {
        let (create_tx, create_rx) = oneshot::channel();
        let (delete_tx, delete_rx) = oneshot::channel();
        let api = GatedApi {
            create_gate: RefCell::new(Some(create_rx)),
            delete_gate: RefCell::new(Some(delete_rx)),
        };
        let state = Rc::new(RefCell::new(DashboardState::new()));
        state.borrow_mut().replace_all(vec![food(1, "Rice"), food(2, "Beans")]);
        let dashboard = Dashboard::new(api, state.clone());

        // Add is issued first but its response lands after the delete's
        let respond = async move {
            delete_tx.send(()).unwrap();
            tokio::task::yield_now().await;
            create_tx.send(food(3, "Salad")).unwrap();
        };
        let (added, deleted, _) = tokio::join!(
            dashboard.add(NewFood {
                name: "Salad".to_string(),
                ..Default::default()
            }),
            dashboard.delete(Some(2)),
            respond,
        );
        added.unwrap();
        deleted.unwrap();

        assert_eq!(state.borrow().foods, vec![food(1, "Rice"), food(3, "Salad")]);
    }

    #[tokio::test]
    async fn test_delete_failure_propagates() {
        let mut api = MockFoodApi::new();
        api.expect_delete().times(1).returning(|_| Err(http_error()));
        let dashboard = dashboard(api, vec![food(2, "Beans")]);

        let result = dashboard.delete(Some(2)).await;
        assert!(matches!(result, Err(ApiError::Http { status: 500, .. })));
        assert_eq!(foods_of(&dashboard), vec![food(2, "Beans")]);
    }

    #[test]
    fn test_toggle_add_while_editing_closes_modal() {
        let dashboard = dashboard(MockFoodApi::new(), vec![food(2, "Beans")]);
        dashboard.select_for_edit(food(2, "Beans"));

        dashboard.toggle_modal(ActiveModal::Add);
        assert_eq!(dashboard.state().borrow().active_modal, ActiveModal::Closed);
    }
}
