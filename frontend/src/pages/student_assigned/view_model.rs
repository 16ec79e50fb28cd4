use super::repository::AssignedRepository;
use crate::{
    api::{ApiClient, StudentJob},
    forms::DetailModal,
    list::{ListViewModel, RefreshPolicy},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AssignedViewModel {
    pub list: ListViewModel<AssignedRepository>,
    pub detail: DetailModal<StudentJob>,
}

pub fn use_assigned_view_model() -> AssignedViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let list = ListViewModel::new(AssignedRepository::new_with_client(Rc::new(api)), RefreshPolicy::default());
    create_effect(move |_| list.load_first_page());
    AssignedViewModel {
        list,
        detail: DetailModal::new(),
    }
}
