use crate::{
    components::{
        common::Button,
        fields::{field_error, CheckboxField, FileField, SelectField, TextAreaField, TextField},
        layout::LoadingSpinner,
        modal::Modal,
    },
    forms::{validation::UK_COUNTRIES, FieldErrors, ModalMode},
    pages::homecare::{utils::HomecareFormState, view_model::HomecareViewModel},
};
use leptos::{ev::SubmitEvent, *};

type Getter = fn(&HomecareFormState) -> String;
type Setter = fn(&mut HomecareFormState, String);

#[component]
pub fn HomecareFormModal(vm: HomecareViewModel) -> impl IntoView {
    let form = vm.form;
    let state = form.state;
    let errors: Signal<FieldErrors> = form.errors();
    let fetching = Signal::derive(move || state.with(|s| s.fetching));
    let submitting = Signal::derive(move || state.with(|s| s.submitting));
    let is_create = Signal::derive(move || state.with(|s| s.mode == ModalMode::Create));
    let title = Signal::derive(move || {
        if is_create.get() {
            "Add Homecare".to_string()
        } else {
            "Edit Homecare".to_string()
        }
    });

    let value = move |get: Getter| Signal::derive(move || state.with(|s| get(&s.form)));
    let input = move |set: Setter| Callback::new(move |v: String| form.update_form(|f| set(f, v)));
    let text = move |label: &'static str, field: &'static str, get: Getter, set: Setter, required: bool| {
        view! {
            <TextField
                label=label
                required=required
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

    view! {
        <Modal is_open=form.is_open() title=title on_close=Callback::new(move |_| form.close()) wide=true>
            <Show when=move || !fetching.get() fallback=|| view! { <LoadingSpinner /> }>
                <form class="grid grid-cols-1 gap-4 sm:grid-cols-2" on:submit=on_submit novalidate>
                    {text("Homecare Name", "home_care_name", |f| f.home_care_name.clone(), |f, v| f.home_care_name = v, true)}
                    {text("Provider Name", "provider_name", |f| f.provider_name.clone(), |f, v| f.provider_name = v, true)}
                    {text("Registration Number", "registration_number", |f| f.registration_number.clone(), |f, v| f.registration_number = v, true)}
                    {text("Service Type", "service_type", |f| f.service_type.clone(), |f, v| f.service_type = v, true)}
                    {text("Address Line 1", "address_line1", |f| f.address_line1.clone(), |f, v| f.address_line1 = v, true)}
                    {text("Address Line 2", "address_line2", |f| f.address_line2.clone(), |f, v| f.address_line2 = v, false)}
                    {text("City", "city", |f| f.city.clone(), |f, v| f.city = v, true)}
                    {text("Postcode", "postcode", |f| f.postcode.clone(), |f, v| f.postcode = v, true)}
                    <SelectField
                        label="Country"
                        required=true
                        value=value(|f| f.country.clone())
                        options=UK_COUNTRIES
                        on_change=input(|f, v| f.country = v)
                        error=field_error(errors, "country")
                    />
                    {text("Full Address", "full_address", |f| f.full_address.clone(), |f, v| f.full_address = v, false)}
                    {text("Phone", "phone", |f| f.phone.clone(), |f, v| f.phone = v, true)}
                    <TextField
                        label="Email"
                        input_type="email"
                        required=true
                        value=value(|f| f.email.clone())
                        on_input=input(|f, v| f.email = v)
                        error=field_error(errors, "email")
                    />
                    <Show when=move || is_create.get()>
                        <TextField
                            label="Password"
                            input_type="password"
                            required=true
                            value=value(|f| f.password.clone())
                            on_input=input(|f, v| f.password = v)
                            error=field_error(errors, "password")
                        />
                    </Show>
                    {text("Website", "website", |f| f.website.clone(), |f, v| f.website = v, false)}
                    {text("Contact Person", "contact_person", |f| f.contact_person.clone(), |f, v| f.contact_person = v, false)}
                    <TextField
                        label="Registration Date"
                        input_type="date"
                        value=value(|f| f.registration_date.clone())
                        on_input=input(|f, v| f.registration_date = v)
                    />
                    {text("Latitude", "latitude", |f| f.latitude.clone(), |f, v| f.latitude = v, false)}
                    {text("Longitude", "longitude", |f| f.longitude.clone(), |f, v| f.longitude = v, false)}
                    <div class="flex items-center gap-6 sm:col-span-2">
                        <CheckboxField
                            label="Regulated by CQC"
                            checked=Signal::derive(move || state.with(|s| s.form.regulated_by_cqc))
                            on_toggle=Callback::new(move |v| form.update_form(|f| f.regulated_by_cqc = v))
                        />
                        <CheckboxField
                            label="Active"
                            checked=Signal::derive(move || state.with(|s| s.form.active))
                            on_toggle=Callback::new(move |v| form.update_form(|f| f.active = v))
                        />
                    </div>
                    <div class="sm:col-span-2">
                        <TextAreaField
                            label="Notes"
                            value=value(|f| f.notes.clone())
                            on_input=input(|f, v| f.notes = v)
                        />
                    </div>
                    <div class="sm:col-span-2">
                        <FileField label="Image" accept="image/*" on_change=on_image preview=form.preview_src />
                    </div>
                    <div class="flex justify-end gap-2 sm:col-span-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-border text-fg hover:bg-surface-muted"
                            on:click=move |_| form.close()
                        >
                            "Cancel"
                        </button>
                        <Button loading=submitting attr:type="submit">
                            {move || if is_create.get() { "Create" } else { "Save changes" }}
                        </Button>
                    </div>
                </form>
            </Show>
        </Modal>
    }
}
