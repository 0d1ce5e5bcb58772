use crate::ui::mvi::Reducer;
use crate::ui::table::intent::TableIntent;
use crate::ui::table::state::{SortOrder, TableState};

pub struct TableReducer;

impl Reducer for TableReducer {
    type State = TableState;
    type Intent = TableIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TableIntent::SortBy(key) => {
                if state.sort_key == key {
                    TableState {
                        sort_key: key,
                        order: state.order.toggled(),
                    }
                } else {
                    TableState {
                        sort_key: key,
                        order: SortOrder::Ascending,
                    }
                }
            }
            TableIntent::ResetSort => TableState::default(),
        }
    }
}
