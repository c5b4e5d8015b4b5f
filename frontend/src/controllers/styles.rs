use crate::error::SiteError;
use crate::utils::dom;

pub const PAGE_STYLES: &str = r#"
.os-instructions {
    transition: max-height 0.5s cubic-bezier(0.4, 0, 0.2, 1),
                opacity 0.3s ease,
                padding 0.3s ease;
}

.fade-in {
    animation: fadeInContent 0.4s cubic-bezier(0.4, 0, 0.2, 1) forwards;
}

@keyframes fadeInContent {
    from { opacity: 0; transform: translateY(10px); }
    to { opacity: 1; transform: translateY(0); }
}

.feature-card, .step, .source-container, .cta-content {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}

.feature-card.animated, .step.animated, .source-container.animated, .cta-content.animated {
    opacity: 1;
    transform: translateY(0);
}

.step:nth-child(2) { transition-delay: 0.1s; }
.step:nth-child(3) { transition-delay: 0.2s; }
.step:nth-child(4) { transition-delay: 0.3s; }
.step:nth-child(5) { transition-delay: 0.4s; }
.step:nth-child(6) { transition-delay: 0.5s; }

.feature-card:nth-child(2) { transition-delay: 0.1s; }
.feature-card:nth-child(3) { transition-delay: 0.2s; }
.feature-card:nth-child(4) { transition-delay: 0.3s; }

.keyword { color: #ff79c6; }
.string { color: #f1fa8c; }
.comment { color: #6272a4; }
"#;

pub fn init() -> Result<(), SiteError> {
    let document = dom::document()?;
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_text_content(Some(PAGE_STYLES));
    head.append_child(&style)?;
    Ok(())
}
