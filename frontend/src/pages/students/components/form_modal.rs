use crate::{
    components::{
        common::Button,
        fields::{field_error, FileField, SelectField, TextField},
        layout::LoadingSpinner,
        modal::Modal,
    },
    forms::{
        validation::{GENDERS, UK_COUNTRIES},
        FieldErrors,
    },
    pages::students::{utils::StudentFormState, view_model::StudentsViewModel},
};
use leptos::{ev::SubmitEvent, *};

type Getter = fn(&StudentFormState) -> String;
type Setter = fn(&mut StudentFormState, String);

#[component]
pub fn StudentFormModal(vm: StudentsViewModel) -> impl IntoView {
    let form = vm.form;
    let state = form.state;
    let errors: Signal<FieldErrors> = form.errors();
    let fetching = Signal::derive(move || state.with(|s| s.fetching));
    let submitting = Signal::derive(move || state.with(|s| s.submitting));

    let value = move |get: Getter| Signal::derive(move || state.with(|s| get(&s.form)));
    let input = move |set: Setter| Callback::new(move |v: String| form.update_form(|f| set(f, v)));
    let text = move |label: &'static str, field: &'static str, kind: &'static str, get: Getter, set: Setter| {
        view! {
            <TextField
                label=label
                input_type=kind
                value=value(get)
                on_input=input(set)
                error=field_error(errors, field)
            />
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let on_image = Callback::new(move |ev: ev::Event| {
        form.pick_file(&ev, true, |f, attachment| f.img = attachment);
    });
    let on_document = Callback::new(move |ev: ev::Event| {
        form.pick_file(&ev, false, |f, attachment| f.document = attachment);
    });

    view! {
        <Modal is_open=form.is_open() title="Edit Student" on_close=Callback::new(move |_| form.close()) wide=true>
            <Show when=move || !fetching.get() fallback=|| view! { <LoadingSpinner /> }>
                <form class="grid grid-cols-1 gap-4 sm:grid-cols-2" on:submit=on_submit novalidate>
                    {text("Full Name", "full_name", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                    {text("Email", "email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {text("New Password", "password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {text("Phone", "phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                    {text("Second Email", "second_email", "email", |f| f.second_email.clone(), |f, v| f.second_email = v)}
                    <SelectField
                        label="Gender"
                        value=value(|f| f.gender.clone())
                        options=GENDERS
                        on_change=input(|f, v| f.gender = v)
                        error=field_error(errors, "gender")
                    />
                    {text("Date of Birth", "date_of_birth", "date", |f| f.date_of_birth.clone(), |f, v| f.date_of_birth = v)}
                    {text("Nationality", "nationality", "text", |f| f.nationality.clone(), |f, v| f.nationality = v)}
                    <SelectField
                        label="Country"
                        value=value(|f| f.country.clone())
                        options=UK_COUNTRIES
                        on_change=input(|f, v| f.country = v)
                        error=field_error(errors, "country")
                    />
                    {text("State", "state", "text", |f| f.state.clone(), |f, v| f.state = v)}
                    {text("City", "city", "text", |f| f.city.clone(), |f, v| f.city = v)}
                    {text("Address", "address", "text", |f| f.address.clone(), |f, v| f.address = v)}
                    {text("Postal Code", "postal_code", "text", |f| f.postal_code.clone(), |f, v| f.postal_code = v)}
                    <FileField label="Profile Image" accept="image/*" on_change=on_image preview=form.preview_src />
                    <FileField label="Document" accept="image/*,application/pdf" on_change=on_document />
                    <div class="flex justify-end gap-2 sm:col-span-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-border text-fg hover:bg-surface-muted"
                            on:click=move |_| form.close()
                        >
                            "Cancel"
                        </button>
                        <Button loading=submitting attr:type="submit">"Save changes"</Button>
                    </div>
                </form>
            </Show>
        </Modal>
    }
}
