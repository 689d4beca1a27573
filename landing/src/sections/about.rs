use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container about-grid">
                <img
                    src="https://images.unsplash.com/photo-1551218808-94e220e084d2?q=80&w=1200&auto=format&fit=crop"
                    alt="about"
                    class="about-image"
                    loading="lazy"
                />
                <div>
                    <h4 class="section-title">"About MealVersity"</h4>
                    <p class="section-subtitle">
                        "We combine nutrition science and great taste. Menus rotate weekly, "
                        "sourced from local farms and packaged sustainably."
                    </p>
                    <ul class="about-points">
                        <li>"• Chef-curated rotating menus"</li>
                        <li>"• Swap up to 48 hours before delivery"</li>
                        <li>"• Pause or cancel anytime — transparent pricing"</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}
