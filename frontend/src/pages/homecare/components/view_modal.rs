use crate::{
    api::Homecare,
    components::{
        common::StatusBadge,
        layout::LoadingSpinner,
        modal::{DetailItem, Modal},
    },
    forms::{dates::display_date, DetailModal},
};
use leptos::*;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[component]
pub fn HomecareViewModal(detail: DetailModal<Homecare>) -> impl IntoView {
    let on_close = Callback::new(move |_| detail.close());
    view! {
        <Modal is_open=detail.is_open() title="Homecare Details" on_close=on_close wide=true>
            <Show when=move || !detail.loading.get() fallback=|| view! { <LoadingSpinner /> }>
                {move || detail.record.get().map(|h| {
                    let address = [h.address_line1.clone(), h.address_line2.clone().unwrap_or_default()]
                        .into_iter()
                        .filter(|part| !part.is_empty())
                        .collect::<Vec<_>>()
                        .join(", ");
                    let coordinates = match (&h.latitude, &h.longitude) {
                        (Some(lat), Some(lng)) => format!("{}, {}", lat, lng),
                        _ => String::new(),
                    };
                    let registered = h.registration_date.as_deref().map(display_date).unwrap_or_default();
                    view! {
                    <div class="flex items-center gap-4">
                        {h.img.clone().filter(|src| !src.is_empty()).map(|src| view! {
                            <img src=src alt="Homecare" class="h-20 w-20 rounded-md object-cover border border-border" />
                        })}
                        <div>
                            <p class="text-lg font-semibold text-fg">{h.home_care_name.clone()}</p>
                            <StatusBadge status=h.status.clone() />
                        </div>
                    </div>
                    <dl class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                        <DetailItem label="Provider" value=h.provider_name.clone() />
                        <DetailItem label="Registration number" value=h.registration_number.clone() />
                        <DetailItem label="Service type" value=h.service_type.clone() />
                        <DetailItem label="Contact person" value=h.contact_person.clone().unwrap_or_default() />
                        <DetailItem label="Email" value=h.email.clone() />
                        <DetailItem label="Phone" value=h.phone.clone() />
                        <DetailItem label="Website" value=h.website.clone().unwrap_or_default() />
                        <DetailItem label="Address" value=address />
                        <DetailItem label="City" value=h.city.clone() />
                        <DetailItem label="Postcode" value=h.postcode.clone() />
                        <DetailItem label="Country" value=h.country.clone() />
                        <DetailItem label="Regulated by CQC" value=yes_no(h.regulated_by_cqc) />
                        <DetailItem label="Registration date" value=registered />
                        <DetailItem label="Active" value=yes_no(h.active) />
                        <DetailItem label="Coordinates" value=coordinates />
                        <DetailItem label="Notes" value=h.notes.clone().unwrap_or_default() />
                    </dl>
                    }
                })}
            </Show>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn shows_record_fields() {
        let html = render_to_string(move || {
            let detail = DetailModal::<Homecare>::new();
            detail.show(Homecare {
                home_care_name: "Oak House".into(),
                postcode: "LS1 4AB".into(),
                regulated_by_cqc: true,
                registration_date: Some("2024-02-01T00:00:00.000Z".into()),
                ..Default::default()
            });
            view! { <HomecareViewModal detail=detail /> }
        });
        assert!(html.contains("Oak House"));
        assert!(html.contains("LS1 4AB"));
        assert!(html.contains("01 Feb 2024"));
        assert!(html.contains("Yes"));
    }
}
