//! Shared decklist fixtures for the engine integration tests.
#![allow(dead_code)]

use decksync_engine::cards::CardKey;
use decksync_engine::resolver::{NameResolver, ResolveError};

/// 24 lines summing to 60 cards, sideboard of 4 lines summing to 8.
pub const TEMUR: &str = "Deck
4 Steam Vents (GRN) 257
4 Breeding Pool (RNA) 246
4 Stomping Ground (RNA) 259
1 Jace, Wielder of Mysteries (WAR) 54
2 Paradise Druid (WAR) 171
4 Neoform (WAR) 206
2 Cloudkin Seer (M20) 54
3 Scampering Scorcher (M20) 158
4 Shock (M20) 160
2 Thunderkin Awakener (M20) 162
2 Cavalier of Thorns (M20) 167
4 Leafkin Druid (M20) 178
1 Overgrowth Elemental (M20) 187
4 Omnath, Locus of the Roil (M20) 216
4 Risen Reef (M20) 217
1 Temple of Mystery (M20) 255
2 Island (ELD) 57
1 Mountain (ELD) 59
2 Forest (ELD) 60
3 The Great Henge (ELD) 161
1 Castle Embereth (ELD) 239
1 Castle Garenbrig (ELD) 240
1 Castle Vantress (ELD) 242
3 Fabled Passage (ELD) 244

Sideboard
1 Jace, Wielder of Mysteries (WAR) 54
3 Nissa, Who Shakes the World (WAR) 169
1 Tamiyo, Collector of Tales (WAR) 220
3 Chandra, Awakened Inferno (M20) 127";

pub const PARTIAL: &str = "Deck
4 Steam Vents (GRN) 257

Sideboard
3 Chandra, Awakened Inferno (M20) 127";

/// French Arena export: 18 lines summing to 60, sideboard summing to 15.
pub const SIMIC_FR: &str = "Deck
3 Île (ELD) 254
2 Téfeiri, effileur de temps (WAR) 221
1 Plaine (ELD) 250
2 Passage merveilleux (ELD) 244
4 Oko, voleur de couronnes (ELD) 197
4 Oie d'or (ELD) 160
4 Nissa, celle qui fait trembler le monde (WAR) 169
4 Krasis hydroïde (RNA) 183
4 Jardin du temple (GRN) 258
3 Il était une fois... (ELD) 169
6 Forêt (ELD) 266
4 Fontaine sacrée (RNA) 251
4 Druidesse de paradis (WAR) 171
4 Bête de Quête (ELD) 171
4 Bassin d'élevage (RNA) 246
3 Adjointe aux détentions (RNA) 165
3 Méchant loup (ELD) 181
1 Pixie de Marafeuille (ELD) 196

Réserve
1 Cératops changeant (M20) 194
2 Tolsimir, ami des loups (WAR) 224
2 Décret fervent (M20) 13
1 Ashiok, broyeur de rêves (WAR) 228
1 Cercueil de verre (ELD) 15
3 Botte dédaigneuse (GRN) 37
2 Rafale d'Éther (M20) 42
1 Adjointe aux détentions (RNA) 165
1 Téfeiri, effileur de temps (WAR) 221
1 Emprunteur intrépide (ELD) 39";

/// Brawl list with a French commander header and 40 singleton cards.
pub const BRAWL_FR: &str = "Commandant
1 Niv-Mizzet revenu à la vie (WAR) 208

Deck
1 Œuf d'or (ELD) 220
1 Géode de mana (WAR) 241
1 Lanterne chromatique (GRN) 233
1 Temple du triomphe (M20) 257
1 Temple de la révélation (M20) 253
1 Champ des morts (M20) 247
1 Globe de guilde (WAR) 239
1 Cachet d'ésotérisme (ELD) 331
1 Suppression d'étincelle (WAR) 190
1 Plaine (ELD) 253
1 Île (ELD) 254
1 Voile de l'été (M20) 198
1 Clairon assourdissant (GRN) 165
1 Véto de Dovin (WAR) 193
1 Tombe aquatique (GRN) 259
1 Téfeiri, effileur de temps (WAR) 221
1 Vraska, reine des Golgari (GRN) 213
1 Mortification (RNA) 192
1 Krasis hydroïde (RNA) 183
1 Spirale de croissance (RNA) 178
1 Mépris selon le Tyran (WAR) 225
1 Porte de la guilde de Rakdos (RNA) 255
1 Chemin sinueux (GRN) 125
1 Golos, pèlerin infatigable (M20) 226
1 Temple de la maladie (M20) 254
1 Temple du mystère (M20) 255
1 Temple du silence (M20) 256
1 Tour de commandement (ELD) 333
1 Reliquaire impie (RNA) 248
1 Bassin d'élevage (RNA) 246
1 Fontaine sacrée (RNA) 251
1 Fonderie sacrée (GRN) 254
1 Jardin du temple (GRN) 258
1 Marais (M20) 271
1 Conduits de vapeur (GRN) 257
1 Crypte de sang (RNA) 245
1 Terrain de prédilection (RNA) 259
1 Tombeau luxuriant (GRN) 253
1 Affres (RNA) 157
1 Décèlement // Dessein (GRN) 225";

/// `n` singleton lines with distinct collector ids in M20.
pub fn singletons(n: u32) -> String {
    (1..=n)
        .map(|i| format!("1 Filler {} (M20) {}", i, i))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolver that fails every batch with a transport error and counts calls.
#[derive(Default)]
pub struct OfflineResolver {
    pub calls: std::sync::atomic::AtomicUsize,
}

#[async_trait::async_trait]
impl NameResolver for OfflineResolver {
    async fn resolve(&self, _batch: &[CardKey]) -> Result<Vec<String>, ResolveError> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Err(ResolveError::Unavailable("connection refused".into()))
    }
}

/// Resolver that answers every batch with one name too few.
pub struct ShortResolver;

#[async_trait::async_trait]
impl NameResolver for ShortResolver {
    async fn resolve(&self, batch: &[CardKey]) -> Result<Vec<String>, ResolveError> {
        Ok(batch
            .iter()
            .skip(1)
            .map(|k| format!("Card {}", k.collector_id))
            .collect())
    }
}
