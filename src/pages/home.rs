use yew::prelude::*;

use crate::analytics::{self, AnalyticsEvent};
use crate::components::carousel::{Carousel, CarouselKind};
use crate::components::certificate_modal::{CertificateFigure, ModalHandle};
use crate::components::feature_button::FeatureButton;
use crate::components::smooth_scroll::intercept_anchor_click;
use crate::config;
use crate::content::{Cta, ACHIEVEMENTS, FEATURES, HERO_CTAS, TEAM_PHOTOS};

#[derive(Properties, PartialEq)]
struct CtaLinkProps {
    cta: Cta,
    #[prop_or_default]
    primary: bool,
}

#[function_component(CtaLink)]
fn cta_link(props: &CtaLinkProps) -> Html {
    let Cta { label, href } = props.cta;
    let onclick = Callback::from(move |e: MouseEvent| {
        analytics::track(&AnalyticsEvent::cta(label, Some(href)));
        intercept_anchor_click(&e, href);
    });

    html! {
        <a class={classes!("btn", props.primary.then_some("btn-primary"))} {href} {onclick}>
            {label}
        </a>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Achievements stay put while a certificate is being looked at.
    let modal_open = use_context::<ModalHandle>().map_or(false, |modal| modal.is_open());

    html! {
        <main id="top" class="home">
            <section id="about" class="hero">
                <h1>{"Robots built by students, for the real world"}</h1>
                <p class="hero-subtitle">
                    {"We design, build and program competition robots, \
                      then take them to classrooms."}
                </p>
                <div class="cta-buttons">
                    { for HERO_CTAS.iter().enumerate().map(|(i, cta)| html! {
                        <CtaLink cta={*cta} primary={i == 0} />
                    }) }
                </div>
            </section>

            <section id="features" class="features">
                <h2>{"What we do"}</h2>
                <div class="feature-buttons">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <FeatureButton {index} label={feature.label} href={feature.href} />
                    }) }
                </div>
            </section>

            <section id="team" class="team">
                <h2>{"The team"}</h2>
                <Carousel
                    id="teamCarousel"
                    kind={CarouselKind::Team}
                    interval_ms={config::TEAM_CAROUSEL_INTERVAL_MS}
                >
                    { for TEAM_PHOTOS.iter().map(|photo| html! {
                        <figure class="team-photo">
                            <img src={photo.src} alt={photo.alt} loading="lazy" />
                            <figcaption>{photo.caption}</figcaption>
                        </figure>
                    }) }
                </Carousel>
            </section>

            <section id="achievements" class="achievements">
                <h2>{"Achievements"}</h2>
                <Carousel
                    id="achievementsCarousel"
                    kind={CarouselKind::Achievements}
                    interval_ms={config::ACHIEVEMENTS_CAROUSEL_INTERVAL_MS}
                    paused={modal_open}
                >
                    { for ACHIEVEMENTS.iter().map(|achievement| html! {
                        <CertificateFigure
                            title={achievement.title}
                            thumbnail={achievement.thumbnail}
                            certificate={achievement.certificate.map(AttrValue::from)}
                            caption={AttrValue::from(achievement.caption)}
                        />
                    }) }
                </Carousel>
            </section>

            <section id="contact" class="contact">
                <h2>{"Contact"}</h2>
                <p>
                    {"Sponsorship, workshops or just curious? Write to "}
                    <a href="mailto:hello@lumenrobotics.org">{"hello@lumenrobotics.org"}</a>
                </p>
            </section>
        </main>
    }
}
