use crate::{
    api::Student,
    components::{
        common::StatusBadge,
        layout::LoadingSpinner,
        modal::{DetailItem, Modal},
    },
    forms::{dates::display_date, preview::remote_image, DetailModal},
};
use leptos::*;

#[component]
pub fn StudentViewModal(detail: DetailModal<Student>) -> impl IntoView {
    view! {
        <Modal is_open=detail.is_open() title="Student Details" on_close=Callback::new(move |_| detail.close()) wide=true>
            <Show when=move || !detail.loading.get() fallback=|| view! { <LoadingSpinner /> }>
                {move || detail.record.get().map(|s| {
                    let photo = remote_image(s.profile_image.as_deref()).map(|p| p.src().to_string());
                    view! {
                        <div class="flex items-center gap-4">
                            {photo.map(|src| view! {
                                <img src=src alt="Student" class="h-20 w-20 rounded-full object-cover border border-border" />
                            })}
                            <div>
                                <p class="text-lg font-semibold text-fg">{s.full_name.clone()}</p>
                                <StatusBadge status=s.status.clone() />
                            </div>
                        </div>
                        <dl class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                            <DetailItem label="Email" value=s.email.clone() />
                            <DetailItem label="Second email" value=s.second_email.clone().unwrap_or_default() />
                            <DetailItem label="Phone" value=s.phone.clone() />
                            <DetailItem label="Gender" value=s.gender.clone() />
                            <DetailItem label="Date of birth"
                                value=s.date_of_birth.as_deref().map(display_date).unwrap_or_default() />
                            <DetailItem label="Nationality" value=s.nationality.clone() />
                            <DetailItem label="Address" value=s.address.clone() />
                            <DetailItem label="City" value=s.city.clone() />
                            <DetailItem label="State" value=s.state.clone() />
                            <DetailItem label="Country" value=s.country.clone() />
                            <DetailItem label="Postal code" value=s.postal_code.clone() />
                            <DetailItem label="Document type" value=s.document_type.clone().unwrap_or_default() />
                            <DetailItem label="Document number" value=s.document_number.clone().unwrap_or_default() />
                            <DetailItem label="Document expiry"
                                value=s.document_expiry.as_deref().map(display_date).unwrap_or_default() />
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
    fn shows_student_details() {
        let html = render_to_string(move || {
            let detail = DetailModal::<Student>::new();
            detail.show(Student {
                full_name: "Ada Lovelace".into(),
                nationality: "British".into(),
                date_of_birth: Some("2001-05-04".into()),
                ..Default::default()
            });
            view! { <StudentViewModal detail=detail /> }
        });
        assert!(html.contains("Student Details"));
        assert!(html.contains("British"));
        assert!(html.contains("04 May 2001"));
    }
}
