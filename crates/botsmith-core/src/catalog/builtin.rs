//! Builtin template definitions
//!
//! One customizable command template and one fixed bundle per
//! category. Bodies are discord.js sources with named `{{slot}}`
//! placeholders; button-import and visual-embed slots default to the
//! empty string so an uncustomized render is already valid code.

use super::template::{slot, CodeTemplate};
use crate::types::{Category, FeatureSet, FeatureTag};

fn affinity(tags: &[FeatureTag]) -> FeatureSet {
    tags.iter().copied().collect()
}

/// The full builtin set, in declaration order
pub(super) fn builtin_templates() -> Vec<CodeTemplate> {
    vec![
        ticket_panel(),
        economy_system(),
        punish_command(),
        play_command(),
        generic_command(),
        ticket_verify_bundle(),
        economy_bundle(),
        moderation_bundle(),
        media_bundle(),
        fallback_bundle(),
    ]
}

fn ticket_panel() -> CodeTemplate {
    CodeTemplate::new(
        "ticket-panel",
        Category::Ticketing,
        "ticket",
        r#"const { SlashCommandBuilder, EmbedBuilder{{button_imports}} } = require('discord.js');

module.exports = {
    data: new SlashCommandBuilder()
        .setName('{{command_name}}')
        .setDescription('Abre o painel de atendimento do servidor'),

    async execute(interaction) {
        const embed = new EmbedBuilder()
            .setTitle('Central de Atendimento')
            .setDescription('Clique no botão abaixo para abrir um ticket com a equipe.')
            .setColor(0x5865f2){{visual_embed}};

        await interaction.reply({ embeds: [embed] });
    },
};
"#,
    )
    .with_description("Painel de abertura de tickets")
    .with_slot_default(slot::BUTTON_IMPORTS, "")
    .with_slot_default(slot::VISUAL_EMBED, "")
    .with_affinity(affinity(&[
        FeatureTag::InteractiveButtons,
        FeatureTag::VisualEmbed,
    ]))
}

fn economy_system() -> CodeTemplate {
    CodeTemplate::new(
        "economy-system",
        Category::Economy,
        "economia",
        r#"const { SlashCommandBuilder, EmbedBuilder{{button_imports}} } = require('discord.js');

const economyConfig = {
    currencyName: 'coins',
    dailyAmount: 250,
    shopItems: [
        { id: 'vip', label: 'Cargo VIP', price: 5000 },
        { id: 'cor', label: 'Cor personalizada', price: 1500 },
    ],
};

const balances = new Map();

module.exports = {
    data: new SlashCommandBuilder()
        .setName('{{command_name}}')
        .setDescription('Sistema de economia do servidor')
        .addSubcommand((sub) => sub.setName('saldo').setDescription('Mostra o seu saldo'))
        .addSubcommand((sub) => sub.setName('daily').setDescription('Resgata a recompensa diária'))
        .addSubcommand((sub) => sub.setName('loja').setDescription('Mostra os itens da loja')),

    async execute(interaction) {
        const userId = interaction.user.id;
        const current = balances.get(userId) ?? 0;

        switch (interaction.options.getSubcommand()) {
            case 'daily': {
                balances.set(userId, current + economyConfig.dailyAmount);
                await interaction.reply(
                    `Você resgatou ${economyConfig.dailyAmount} ${economyConfig.currencyName}!`
                );
                break;
            }
            case 'loja': {
                const lines = economyConfig.shopItems
                    .map((item) => `**${item.label}** — ${item.price} ${economyConfig.currencyName}`)
                    .join('\n');
                const embed = new EmbedBuilder()
                    .setTitle('Loja do Servidor')
                    .setDescription(lines)
                    .setColor(0xf1c40f){{visual_embed}};
                await interaction.reply({ embeds: [embed] });
                break;
            }
            default:
                await interaction.reply(`Saldo atual: ${current} ${economyConfig.currencyName}.`);
        }
    },
};
"#,
    )
    .with_description("Economia com saldo, daily e loja")
    .with_slot_default(slot::BUTTON_IMPORTS, "")
    .with_slot_default(slot::VISUAL_EMBED, "")
    .with_affinity(affinity(&[
        FeatureTag::Persistence,
        FeatureTag::Scheduled,
        FeatureTag::VisualEmbed,
    ]))
}

fn punish_command() -> CodeTemplate {
    CodeTemplate::new(
        "punish-command",
        Category::Moderation,
        "punir",
        r#"const { SlashCommandBuilder, EmbedBuilder, PermissionFlagsBits{{button_imports}} } = require('discord.js');

module.exports = {
    data: new SlashCommandBuilder()
        .setName('{{command_name}}')
        .setDescription('Aplica uma punição em um membro')
        .addUserOption((opt) =>
            opt.setName('membro').setDescription('Membro a punir').setRequired(true))
        .addStringOption((opt) =>
            opt.setName('motivo').setDescription('Motivo da punição'))
        .setDefaultMemberPermissions(PermissionFlagsBits.BanMembers),

    async execute(interaction) {
        const member = interaction.options.getUser('membro');
        const reason = interaction.options.getString('motivo') ?? 'Sem motivo informado';

        await interaction.guild.members.ban(member.id, { reason });

        const embed = new EmbedBuilder()
            .setTitle('Punição aplicada')
            .setDescription(`${member.tag} foi banido.\nMotivo: ${reason}`)
            .setColor(0xe74c3c){{visual_embed}};

        await interaction.reply({ embeds: [embed] });
    },
};
"#,
    )
    .with_description("Comando de punição com permissão de staff")
    .with_slot_default(slot::BUTTON_IMPORTS, "")
    .with_slot_default(slot::VISUAL_EMBED, "")
    .with_affinity(affinity(&[FeatureTag::PermissionGated]))
}

fn play_command() -> CodeTemplate {
    CodeTemplate::new(
        "play-command",
        Category::MediaPlayback,
        "play",
        r#"const { SlashCommandBuilder, EmbedBuilder{{button_imports}} } = require('discord.js');
const { joinVoiceChannel } = require('@discordjs/voice');

module.exports = {
    data: new SlashCommandBuilder()
        .setName('{{command_name}}')
        .setDescription('Toca uma música no canal de voz')
        .addStringOption((opt) =>
            opt.setName('musica').setDescription('Nome ou link da música').setRequired(true)),

    async execute(interaction) {
        const query = interaction.options.getString('musica');
        const channel = interaction.member.voice.channel;

        if (!channel) {
            await interaction.reply('Entre em um canal de voz primeiro.');
            return;
        }

        joinVoiceChannel({
            channelId: channel.id,
            guildId: channel.guild.id,
            adapterCreator: channel.guild.voiceAdapterCreator,
        });

        const embed = new EmbedBuilder()
            .setTitle('Tocando agora')
            .setDescription(`Adicionado à fila: **${query}**`)
            .setColor(0x1db954){{visual_embed}};

        await interaction.reply({ embeds: [embed] });
    },
};
"#,
    )
    .with_description("Comando de música com fila simples")
    .with_slot_default(slot::BUTTON_IMPORTS, "")
    .with_slot_default(slot::VISUAL_EMBED, "")
    .with_affinity(affinity(&[FeatureTag::ExternalLookup]))
}

fn generic_command() -> CodeTemplate {
    CodeTemplate::new(
        "generic-command",
        Category::Utility,
        "comando",
        r#"const { SlashCommandBuilder, EmbedBuilder{{button_imports}} } = require('discord.js');

module.exports = {
    data: new SlashCommandBuilder()
        .setName('{{command_name}}')
        .setDescription('Comando personalizado'),

    async execute(interaction) {
        const embed = new EmbedBuilder()
            .setTitle('{{command_name}}')
            .setDescription('Aqui está a sua mensagem!')
            .setColor(0x2ecc71){{visual_embed}};

        await interaction.reply({ embeds: [embed] });
    },
};
"#,
    )
    .with_description("Comando genérico de resposta")
    .with_slot_default(slot::BUTTON_IMPORTS, "")
    .with_slot_default(slot::VISUAL_EMBED, "")
    .with_affinity(affinity(&[FeatureTag::VisualEmbed]))
}

fn ticket_verify_bundle() -> CodeTemplate {
    CodeTemplate::bundle(
        "ticket-verify-bundle",
        Category::Ticketing,
        "ticket",
        r#"// Sistema completo de ticket com verificação de membros
const {
    Client,
    GatewayIntentBits,
    EmbedBuilder,
    ActionRowBuilder,
    ButtonBuilder,
    ButtonStyle,
    ChannelType,
} = require('discord.js');

const ticketConfig = {
    categoryId: 'ID_DA_CATEGORIA_DE_TICKETS',
    staffRoleId: 'ID_DO_CARGO_DE_STAFF',
    panelChannelId: 'ID_DO_CANAL_DO_PAINEL',
};

const verifyConfig = {
    verifiedRoleId: 'ID_DO_CARGO_VERIFICADO',
    channelId: 'ID_DO_CANAL_DE_VERIFICACAO',
};

const client = new Client({ intents: [GatewayIntentBits.Guilds] });

client.once('ready', async () => {
    const panelChannel = await client.channels.fetch(ticketConfig.panelChannelId);
    const panel = new EmbedBuilder()
        .setTitle('Central de Atendimento')
        .setDescription('Clique em **Abrir Ticket** para falar com a equipe.')
        .setColor(0x5865f2);
    const row = new ActionRowBuilder().addComponents(
        new ButtonBuilder()
            .setCustomId('abrir_ticket')
            .setLabel('Abrir Ticket')
            .setStyle(ButtonStyle.Primary),
        new ButtonBuilder()
            .setCustomId('verificar')
            .setLabel('Verificar')
            .setStyle(ButtonStyle.Success),
    );
    await panelChannel.send({ embeds: [panel], components: [row] });
});

client.on('interactionCreate', async (interaction) => {
    if (!interaction.isButton()) return;

    if (interaction.customId === 'abrir_ticket') {
        const channel = await interaction.guild.channels.create({
            name: `ticket-${interaction.user.username}`,
            type: ChannelType.GuildText,
            parent: ticketConfig.categoryId,
            permissionOverwrites: [
                { id: interaction.guild.id, deny: ['ViewChannel'] },
                { id: interaction.user.id, allow: ['ViewChannel', 'SendMessages'] },
                { id: ticketConfig.staffRoleId, allow: ['ViewChannel', 'SendMessages'] },
            ],
        });
        await interaction.reply({ content: `Ticket aberto: ${channel}`, ephemeral: true });
    }

    if (interaction.customId === 'verificar') {
        await interaction.member.roles.add(verifyConfig.verifiedRoleId);
        await interaction.reply({ content: 'Você foi verificado!', ephemeral: true });
    }
});

client.login(process.env.TOKEN);
"#,
    )
    .with_description("Bundle de ticket e verificação por botão")
}

fn economy_bundle() -> CodeTemplate {
    CodeTemplate::bundle(
        "economy-bundle",
        Category::Economy,
        "economia",
        r#"// Sistema completo de economia
const { Client, GatewayIntentBits, EmbedBuilder } = require('discord.js');

const economyConfig = {
    currencyName: 'coins',
    dailyAmount: 250,
    startingBalance: 100,
};

const balances = new Map();

const client = new Client({
    intents: [GatewayIntentBits.Guilds, GatewayIntentBits.GuildMessages, GatewayIntentBits.MessageContent],
});

client.on('messageCreate', async (message) => {
    if (message.author.bot) return;

    if (message.content === '!saldo') {
        const balance = balances.get(message.author.id) ?? economyConfig.startingBalance;
        await message.reply(`Saldo: ${balance} ${economyConfig.currencyName}`);
    }

    if (message.content === '!daily') {
        const balance = balances.get(message.author.id) ?? economyConfig.startingBalance;
        balances.set(message.author.id, balance + economyConfig.dailyAmount);
        await message.reply(`Recompensa diária de ${economyConfig.dailyAmount} resgatada!`);
    }
});

client.login(process.env.TOKEN);
"#,
    )
    .with_description("Bundle de economia com saldo e daily")
}

fn moderation_bundle() -> CodeTemplate {
    CodeTemplate::bundle(
        "moderation-bundle",
        Category::Moderation,
        "moderacao",
        r#"// Sistema completo de moderação
const { Client, GatewayIntentBits, PermissionFlagsBits } = require('discord.js');

const moderationConfig = {
    logChannelId: 'ID_DO_CANAL_DE_LOGS',
};

const client = new Client({
    intents: [GatewayIntentBits.Guilds, GatewayIntentBits.GuildMembers, GatewayIntentBits.GuildMessages, GatewayIntentBits.MessageContent],
});

client.on('messageCreate', async (message) => {
    if (message.author.bot) return;
    if (!message.member.permissions.has(PermissionFlagsBits.BanMembers)) return;

    const [command] = message.content.split(' ');
    const target = message.mentions.members.first();
    if (!target) return;

    if (command === '!ban') {
        await target.ban({ reason: `Banido por ${message.author.tag}` });
        await message.reply(`${target.user.tag} foi banido.`);
    }

    if (command === '!kick') {
        await target.kick(`Expulso por ${message.author.tag}`);
        await message.reply(`${target.user.tag} foi expulso.`);
    }
});

client.login(process.env.TOKEN);
"#,
    )
    .with_description("Bundle de moderação com ban e kick")
}

fn media_bundle() -> CodeTemplate {
    CodeTemplate::bundle(
        "media-bundle",
        Category::MediaPlayback,
        "musica",
        r#"// Sistema completo de música
const { Client, GatewayIntentBits } = require('discord.js');
const { joinVoiceChannel } = require('@discordjs/voice');

const client = new Client({
    intents: [GatewayIntentBits.Guilds, GatewayIntentBits.GuildVoiceStates, GatewayIntentBits.GuildMessages, GatewayIntentBits.MessageContent],
});

client.on('messageCreate', async (message) => {
    if (message.author.bot) return;
    if (!message.content.startsWith('!play')) return;

    const channel = message.member.voice.channel;
    if (!channel) {
        await message.reply('Entre em um canal de voz primeiro.');
        return;
    }

    joinVoiceChannel({
        channelId: channel.id,
        guildId: channel.guild.id,
        adapterCreator: channel.guild.voiceAdapterCreator,
    });

    await message.reply('Entrei no canal de voz!');
});

client.login(process.env.TOKEN);
"#,
    )
    .with_description("Bundle de música com entrada em canal de voz")
}

fn fallback_bundle() -> CodeTemplate {
    CodeTemplate::bundle(
        "fallback-bundle",
        Category::Utility,
        "comando",
        r#"// Pedido original: {{request}}
const { Client, GatewayIntentBits } = require('discord.js');

const client = new Client({
    intents: [GatewayIntentBits.Guilds, GatewayIntentBits.GuildMessages, GatewayIntentBits.MessageContent],
});

client.on('messageCreate', async (message) => {
    if (message.author.bot) return;

    if (message.content === '!comando') {
        await message.reply('Comando gerado a partir do seu pedido.');
    }
});

client.login(process.env.TOKEN);
"#,
    )
    .with_description("Bundle genérico que registra o pedido original")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TemplateKind;

    #[test]
    fn test_builtin_ids_unique() {
        let templates = builtin_templates();
        for (i, a) in templates.iter().enumerate() {
            for b in &templates[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_customizable_templates_carry_required_slots() {
        for template in builtin_templates() {
            if template.kind == TemplateKind::Customizable {
                assert!(template.has_slot(slot::COMMAND_NAME), "{}", template.id);
                assert!(template.has_slot(slot::VISUAL_EMBED), "{}", template.id);
                assert!(template.has_slot(slot::BUTTON_IMPORTS), "{}", template.id);
            }
        }
    }

    #[test]
    fn test_ticket_verify_bundle_structures() {
        let template = ticket_verify_bundle();
        assert!(template.body.contains("ticketConfig"));
        assert!(template.body.contains("verifyConfig"));
    }

    #[test]
    fn test_fallback_bundle_embeds_request() {
        let template = fallback_bundle();
        assert!(template.has_slot(slot::REQUEST));
    }

    #[test]
    fn test_default_names_non_empty() {
        for template in builtin_templates() {
            assert!(!template.default_name.is_empty(), "{}", template.id);
        }
    }
}
