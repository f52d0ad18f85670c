use learner_core::ResourceIcon;
use learner_core::model::ModuleIcon;

#[must_use]
pub fn module_glyph(icon: ModuleIcon) -> &'static str {
    match icon {
        ModuleIcon::Layout => ">_",
        ModuleIcon::Database => "\u{26C1}",
        ModuleIcon::Code => "{ }",
        ModuleIcon::Cpu => "\u{2699}",
        ModuleIcon::Book => "\u{1F4D6}",
    }
}

#[must_use]
pub fn resource_glyph(icon: ResourceIcon) -> &'static str {
    match icon {
        ResourceIcon::Book => "\u{1F4D6}",
        ResourceIcon::Globe => "\u{1F310}",
        ResourceIcon::BrainCircuit => "\u{1F9E0}",
        ResourceIcon::Users => "\u{1F465}",
        ResourceIcon::Code => "</>",
        ResourceIcon::Video => "\u{25B6}",
    }
}
