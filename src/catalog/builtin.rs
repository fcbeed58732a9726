use crate::models::{Category, ExcuseRecord};

pub(super) fn records() -> Vec<ExcuseRecord> {
    use Category::*;

    vec![
        ExcuseRecord::new("tech-1", "My VPN only connects if I'm within 3 meters of my router.", Tech, "📡"),
        ExcuseRecord::new("tech-2", "A Windows update is at 12% and warns me not to turn off my computer.", Tech, "💻"),
        ExcuseRecord::new("tech-3", "My laptop charger is in the office and the office is the problem.", Tech, "🔌"),
        ExcuseRecord::new("tech-4", "I'm mid-way through a git rebase and moving would corrupt the timeline.", Tech, "🌿"),
        ExcuseRecord::new("tech-5", "My second monitor refuses to work outside of my home network.", Tech, "🖥️"),
        ExcuseRecord::new("pet-1", "My cat has claimed my keyboard as a heated bed and I don't negotiate with cats.", Pet, "🐈"),
        ExcuseRecord::new("pet-2", "The dog ate my badge. Not metaphorically.", Pet, "🐕"),
        ExcuseRecord::new("pet-3", "My parrot learned my ringtone and I need to stay to tell the calls apart.", Pet, "🦜"),
        ExcuseRecord::new("pet-4", "My goldfish has a vet appointment and needs emotional support.", Pet, "🐠"),
        ExcuseRecord::new("pet-5", "The neighbour's tortoise escaped and I'm on the search committee.", Pet, "🐢"),
        ExcuseRecord::new("health-1", "My standing desk is stuck in standing mode and my legs need a day off.", Health, "🦵"),
        ExcuseRecord::new("health-2", "I have a mild case of open-plan-office allergy.", Health, "🤧"),
        ExcuseRecord::new("health-3", "My ergonomic chair only supports my spine at home.", Health, "🪑"),
        ExcuseRecord::new("health-4", "My doctor prescribed fewer commutes and more pyjamas.", Health, "🩺"),
        ExcuseRecord::new("health-5", "I sneezed during standup yesterday and I'm in voluntary quarantine.", Health, "😷"),
        ExcuseRecord::new("absurd-1", "Mercury is in retrograde and so is my motivation to commute.", Absurd, "🪐"),
        ExcuseRecord::new("absurd-2", "A pigeon is nesting on my car and I respect its privacy.", Absurd, "🐦"),
        ExcuseRecord::new("absurd-3", "I'm waiting for a package that requires a signature and a handshake.", Absurd, "📦"),
        ExcuseRecord::new("absurd-4", "My horoscope said to avoid elevators and our office is on the 9th floor.", Absurd, "🔮"),
        ExcuseRecord::new("absurd-5", "I accidentally glued myself to my home office chair.", Absurd, "🧴"),
    ]
}
