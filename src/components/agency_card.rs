//! Agency Card
//!
//! Directory listing for one agency.

use leptos::prelude::*;

use crate::models::{agency_status, Agency};

#[component]
pub fn AgencyCard(agency: Agency) -> impl IntoView {
    let status_badge = match agency.approved {
        agency_status::PENDING => Some(("badge pending", "Pending review")),
        agency_status::DENIED => Some(("badge denied", "Denied")),
        _ => None,
    };

    view! {
        <article class="agency-card">
            <h3 class="agency-name">
                {agency.name.clone()}
                {status_badge.map(|(class, label)| view! { <span class=class>{label}</span> })}
            </h3>
            <p class="agency-address">
                {agency.address.clone()} ", " {agency.city.clone()} ", " {agency.state.clone()}
            </p>
            {agency
                .phone
                .clone()
                .map(|phone| view! { <p class="agency-phone">{phone}</p> })}
            {agency
                .website
                .clone()
                .map(|website| {
                    view! {
                        <p class="agency-website">
                            <a href=website.clone() target="_blank" rel="noopener">
                                {website.clone()}
                            </a>
                        </p>
                    }
                })}
        </article>
    }
}
