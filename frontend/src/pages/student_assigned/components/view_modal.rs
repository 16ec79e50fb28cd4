use crate::{
    api::StudentJob,
    components::{
        common::StatusBadge,
        modal::{DetailItem, Modal},
    },
    forms::{dates::display_date, DetailModal},
};
use leptos::*;

/// Hours worked as `formattedTotalHours`, else built from the raw hour and minute counts.
pub fn hours_worked(job: &StudentJob) -> String {
    if let Some(formatted) = job.formatted_total_hours.as_deref().filter(|s| !s.is_empty()) {
        return formatted.to_string();
    }
    match (job.total_hours.as_deref(), job.total_minutes.as_deref()) {
        (Some(h), Some(m)) => format!("{}h {}m", h, m),
        (Some(h), None) => format!("{}h", h),
        (None, Some(m)) => format!("{}m", m),
        (None, None) => String::new(),
    }
}

#[component]
pub fn AssignedViewModal(detail: DetailModal<StudentJob>) -> impl IntoView {
    view! {
        <Modal is_open=detail.is_open() title="Assignment Details" on_close=Callback::new(move |_| detail.close())>
            {move || detail.record.get().map(|job| view! {
                <div class="flex items-center justify-between">
                    <p class="text-lg font-semibold text-fg">{job.student_name.clone().unwrap_or_default()}</p>
                    <StatusBadge status=job.status.clone() />
                </div>
                <dl class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                    <DetailItem label="Email" value=job.student_email.clone().unwrap_or_default() />
                    <DetailItem label="Phone" value=job.phone.clone().unwrap_or_default() />
                    <DetailItem label="Homecare" value=job.home_care_name.clone() />
                    <DetailItem label="City" value=job.city.clone() />
                    <DetailItem label="Date" value=display_date(&job.date) />
                    <DetailItem label="Check in" value=job.check_in.clone().unwrap_or_default() />
                    <DetailItem label="Check out" value=job.check_out.clone().unwrap_or_default() />
                    <DetailItem label="Hours worked" value=hours_worked(&job) />
                </dl>
            })}
        </Modal>
    }
}
